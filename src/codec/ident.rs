//! RFC 6381 codec identifier strings.
//!
//! Builds the `codecs` parameter values that containers and manifests
//! advertise for AVC and HEVC tracks, from fields read out of the
//! parameter-set NAL units.

// general_profile_space 0 has no prefix letter.
const HEVC_PROFILE_SPACE_STRINGS: [&str; 4] = ["", "A", "B", "C"];

/// Builds an `avc1.PPCCLL` identifier from the three bytes following the
/// SPS NAL header: profile_idc, the constraint flags byte (including its
/// reserved bits), and level_idc.
///
/// ```
/// use demuxkit::codec::ident;
///
/// assert_eq!(ident::build_avc_codec_string(0x64, 0x00, 0x28), "avc1.640028");
/// ```
pub fn build_avc_codec_string(
    profile_idc: u8,
    constraints_flags_and_reserved_zero_2bits: u8,
    level_idc: u8,
) -> String {
    format!(
        "avc1.{:02X}{:02X}{:02X}",
        profile_idc, constraints_flags_and_reserved_zero_2bits, level_idc
    )
}

/// Builds an `hvc1.` identifier from the general profile fields of the
/// HEVC profile_tier_level structure.
///
/// The constraint bytes contribute one `.XX` segment each, with trailing
/// zero bytes trimmed from the end; when all six are zero no segments are
/// appended.
pub fn build_hevc_codec_string(
    profile_space: u8,
    tier_flag: bool,
    profile_idc: u8,
    profile_compatibility_flags: u32,
    constraint_bytes: &[u8; 6],
    level_idc: u8,
) -> String {
    let mut codec = format!(
        "hvc1.{}{}.{:X}.{}{}",
        HEVC_PROFILE_SPACE_STRINGS[profile_space as usize],
        profile_idc,
        profile_compatibility_flags,
        if tier_flag { 'H' } else { 'L' },
        level_idc,
    );

    let mut trailing_zero_index = constraint_bytes.len();
    while trailing_zero_index > 0 && constraint_bytes[trailing_zero_index - 1] == 0 {
        trailing_zero_index -= 1;
    }
    for byte in &constraint_bytes[..trailing_zero_index] {
        codec.push_str(&format!(".{:02X}", byte));
    }
    codec
}
