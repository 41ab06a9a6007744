use crate::error::{DataKind, DemuxError, Result};
use crate::utils::BitReader;

use super::types::VideoObjectLayer;

// video_object_layer_start_code: 00 00 01 followed by 0x20..=0x2F.
const START_CODE_PREFIX: [u8; 3] = [0x00, 0x00, 0x01];
const VOL_START_CODE_MASK: u8 = 0xF0;
const VOL_START_CODE_VALUE: u8 = 0x20;

const EXTENDED_PAR: u32 = 0x0F;
const SHAPE_RECTANGULAR: u32 = 0x00;

/// Extracts the frame dimensions from an MPEG-4 Visual object layer header.
///
/// Scans `data` byte-wise for a video_object_layer_start_code, then walks
/// the header fields in ISO/IEC 14496-2 order up to and including the
/// interlace flag. Only rectangular object layers are handled; any other
/// shape yields an unsupported-feature error. A missing start code or a
/// cleared marker bit yields a malformed-container error.
///
/// The buffer must cover the complete header; running out of bits mid-walk
/// is a caller-side buffer bug and panics in the bit reader.
pub fn parse_video_object_layer(data: &[u8]) -> Result<VideoObjectLayer> {
    let vol_start = find_vol_start_code(data).ok_or_else(|| {
        DemuxError::malformed(
            DataKind::Container,
            "no video object layer start code in codec initialization data",
        )
    })?;

    let mut reader = BitReader::new(data.to_vec());
    reader.set_position((vol_start + 4) * 8);

    reader.skip_bit(); // random_accessible_vol
    reader.skip_bits(8); // video_object_type_indication

    if reader.read_bit() {
        // is_object_layer_identifier
        reader.skip_bits(4); // video_object_layer_verid
        reader.skip_bits(3); // video_object_layer_priority
    }

    let aspect_ratio_info = reader.read_bits(4);
    if aspect_ratio_info == EXTENDED_PAR {
        reader.skip_bits(8); // par_width
        reader.skip_bits(8); // par_height
    }

    if reader.read_bit() {
        // vol_control_parameters
        reader.skip_bits(2); // chroma_format
        reader.skip_bit(); // low_delay
        if reader.read_bit() {
            // vbv_parameters
            reader.skip_bits(79);
        }
    }

    let shape = reader.read_bits(2);
    if shape != SHAPE_RECTANGULAR {
        return Err(DemuxError::unsupported(
            DataKind::Container,
            "only rectangular video object layers are handled",
        ));
    }

    read_marker_bit(&mut reader)?;
    let vop_time_increment_resolution = reader.read_bits(16);
    read_marker_bit(&mut reader)?;

    if reader.read_bit() {
        // fixed_vop_rate: fixed_vop_time_increment is
        // ceil(log2(vop_time_increment_resolution)) bits wide
        if vop_time_increment_resolution == 0 {
            return Err(DemuxError::malformed(
                DataKind::Container,
                "fixed vop rate with zero time increment resolution",
            ));
        }
        let mut remaining = vop_time_increment_resolution - 1;
        let mut increment_bits = 0;
        while remaining > 0 {
            increment_bits += 1;
            remaining >>= 1;
        }
        reader.skip_bits(increment_bits);
    }

    read_marker_bit(&mut reader)?;
    let width = reader.read_bits(13) as u16;
    read_marker_bit(&mut reader)?;
    let height = reader.read_bits(13) as u16;
    read_marker_bit(&mut reader)?;
    reader.skip_bit(); // interlaced

    log::debug!("video object layer: {}x{}", width, height);

    Ok(VideoObjectLayer { width, height })
}

fn find_vol_start_code(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|window| {
        window[..3] == START_CODE_PREFIX
            && window[3] & VOL_START_CODE_MASK == VOL_START_CODE_VALUE
    })
}

fn read_marker_bit(reader: &mut BitReader) -> Result<()> {
    if !reader.read_bit() {
        return Err(DemuxError::malformed(
            DataKind::Container,
            "marker bit not set in video object layer header",
        ));
    }
    Ok(())
}
