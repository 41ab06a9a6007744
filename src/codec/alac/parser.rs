use bytes::Buf;

use super::types::AlacConfig;

// Fixed offsets within the cookie, per the ALACSpecificConfig layout.
const CHANNEL_COUNT_OFFSET: usize = 9;
const SAMPLE_RATE_OFFSET: usize = 20;

/// Extracts the sample rate and channel count from an ALAC magic cookie.
///
/// The cookie layout is fixed: the channel count is the byte at offset 9
/// and the sample rate is a 32-bit big-endian integer at offset 20. The
/// caller must supply a complete cookie; a short buffer panics on indexing
/// rather than returning a parse error.
///
/// ```
/// use demuxkit::codec::alac;
///
/// let mut cookie = vec![0u8; 24];
/// cookie[9] = 2;
/// cookie[20..24].copy_from_slice(&44_100u32.to_be_bytes());
///
/// let config = alac::parse_magic_cookie(&cookie);
/// assert_eq!(config.sample_rate, 44_100);
/// assert_eq!(config.channel_count, 2);
/// ```
pub fn parse_magic_cookie(cookie: &[u8]) -> AlacConfig {
    let mut channel_field = &cookie[CHANNEL_COUNT_OFFSET..];
    let channel_count = channel_field.get_u8();

    let mut rate_field = &cookie[SAMPLE_RATE_OFFSET..];
    let sample_rate = rate_field.get_u32();

    AlacConfig {
        sample_rate,
        channel_count,
    }
}
