//! # ALAC Magic Cookie Parsing
//!
//! Extracts the fields a demuxer needs from the opaque codec-initialization
//! cookie carried in ALAC sample entries: the output sample rate and the
//! channel count.

/// Parser for the ALAC magic cookie layout
pub mod parser;

/// Type definitions for ALAC configuration
pub mod types;

pub use parser::parse_magic_cookie;
pub use types::AlacConfig;
