//! # Codec Initialization Parsing
//!
//! Grammar-specific extraction of the values a demuxer must publish from
//! raw codec-initialization blobs, plus the elementary-stream utilities
//! that go with them:
//!
//! - [`alac`]: sample rate and channel count from an ALAC magic cookie
//! - [`mpeg4`]: frame dimensions from an MPEG-4 Visual object layer header
//! - [`nal`]: Annex B start-code handling for NAL-structured streams
//! - [`ident`]: RFC 6381 codec identifier strings for AVC and HEVC

pub mod alac;
pub mod ident;
pub mod mpeg4;
pub mod nal;

// Re-export common types
pub use alac::AlacConfig;
pub use mpeg4::VideoObjectLayer;
