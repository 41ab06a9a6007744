//! # MPEG-4 Visual Object Layer Parsing
//!
//! Locates the video_object_layer_start_code in codec initialization data
//! and walks the VOL header bit grammar (ISO/IEC 14496-2) far enough to
//! extract the frame dimensions a demuxer must publish before decoding
//! starts.

/// Parser for the video object layer header
pub mod parser;

/// Type definitions for video object layer configuration
pub mod types;

pub use parser::parse_video_object_layer;
pub use types::VideoObjectLayer;
