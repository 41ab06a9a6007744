use std::sync::Arc;

use demuxkit::av::{OffsetMode, TimestampAdjuster, TIME_UNSET};
use demuxkit::codec::{alac, ident, mpeg4, nal};
use demuxkit::utils::BitReader;

/// Assembles a rectangular MPEG-4 video object layer header for the given
/// dimensions, the way a container would carry it in codec-specific data.
fn vol_codec_data(width: u32, height: u32) -> Vec<u8> {
    let mut writer = BitReader::new(vec![0u8; 12]);
    writer.put_int(0, 1); // random_accessible_vol
    writer.put_int(1, 8); // video_object_type_indication
    writer.put_int(0, 1); // is_object_layer_identifier
    writer.put_int(1, 4); // aspect_ratio_info: square
    writer.put_int(0, 1); // vol_control_parameters
    writer.put_int(0, 2); // video_object_layer_shape: rectangular
    writer.put_int(1, 1); // marker
    writer.put_int(30, 16); // vop_time_increment_resolution
    writer.put_int(1, 1); // marker
    writer.put_int(0, 1); // fixed_vop_rate
    writer.put_int(1, 1); // marker
    writer.put_int(width, 13);
    writer.put_int(1, 1); // marker
    writer.put_int(height, 13);
    writer.put_int(1, 1); // marker
    writer.put_int(0, 1); // interlaced

    let mut data = vec![0x00, 0x00, 0x01, 0x20];
    data.extend_from_slice(writer.data());
    data
}

#[test]
fn test_video_track_initialization_flow() {
    // Parameter sets arrive as one Annex B blob
    let sps_payload = [0x67, 0x64, 0x00, 0x28, 0xAC];
    let pps_payload = [0x68, 0xEE, 0x3C, 0x80];
    let mut csd = Vec::new();
    csd.extend_from_slice(&nal::build_nal_unit(&sps_payload, 0, sps_payload.len()));
    csd.extend_from_slice(&nal::build_nal_unit(&pps_payload, 0, pps_payload.len()));

    let units = nal::split_nal_units(&csd).expect("csd starts with a start code");
    assert_eq!(units.len(), 2);
    assert_eq!(units[0][4], 0x67);
    assert_eq!(units[1][4], 0x68);

    // The SPS bytes after the NAL header feed the identifier string
    let codec = ident::build_avc_codec_string(units[0][5], units[0][6], units[0][7]);
    assert_eq!(codec, "avc1.640028");

    // A sibling HEVC track advertises its profile the same way
    let hevc = ident::build_hevc_codec_string(0, false, 1, 0x6, &[0x90, 0, 0, 0, 0, 0], 93);
    assert_eq!(hevc, "hvc1.1.6.L93.90");
}

#[test]
fn test_mpeg4_and_alac_config_extraction() {
    let vol = mpeg4::parse_video_object_layer(&vol_codec_data(640, 480)).unwrap();
    assert_eq!((vol.width, vol.height), (640, 480));

    let mut cookie = vec![0u8; 24];
    cookie[9] = 2;
    cookie[20..24].copy_from_slice(&44_100u32.to_be_bytes());
    let audio = alac::parse_magic_cookie(&cookie);
    assert_eq!((audio.sample_rate, audio.channel_count), (44_100, 2));
}

#[test]
fn test_two_producers_share_one_timeline() {
    let adjuster = Arc::new(TimestampAdjuster::new(OffsetMode::Shared));

    // The video producer may initialize; the audio producer must wait
    let video = {
        let adjuster = Arc::clone(&adjuster);
        std::thread::spawn(move || {
            adjuster.shared_initialize_or_wait(true, 0).unwrap();
            // First video sample lands at the shared target
            let first = adjuster.adjust_ts_timestamp(900_000);
            let second = adjuster.adjust_ts_timestamp(990_000);
            (first, second)
        })
    };

    let audio = {
        let adjuster = Arc::clone(&adjuster);
        std::thread::spawn(move || {
            adjuster.shared_initialize_or_wait(false, 0).unwrap();
            adjuster.timestamp_offset_us()
        })
    };

    let (first, second) = video.join().unwrap();
    assert_eq!(first, 0);
    assert_eq!(second, 1_000_000);

    // The waiting producer observes the same resolved offset
    let audio_offset = audio.join().unwrap();
    assert_eq!(audio_offset, adjuster.timestamp_offset_us());
    assert_eq!(audio_offset, -10_000_000);

    // Missing timestamps flow through untouched on both paths
    assert_eq!(adjuster.adjust_ts_timestamp(TIME_UNSET), TIME_UNSET);
    assert_eq!(adjuster.adjust_sample_timestamp(TIME_UNSET), TIME_UNSET);
}
