/// Playback parameters extracted from an ALAC magic cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlacConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Number of audio channels.
    pub channel_count: u8,
}
