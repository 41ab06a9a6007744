/// Frame dimensions declared by a video object layer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoObjectLayer {
    /// Luma width in pixels (13-bit field).
    pub width: u16,
    /// Luma height in pixels (13-bit field).
    pub height: u16,
}
