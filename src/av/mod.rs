//! # Audio/Video Timeline Types
//!
//! Cross-cutting timeline handling shared by all elementary-stream readers.
//! The central piece is [`TimestampAdjuster`], which maps the wrapping
//! 33-bit 90 kHz clock carried by transport containers onto one monotonic
//! microsecond timeline, optionally shared by several producer threads.

/// Timestamp normalization and wraparound handling
pub mod timestamp;

pub use timestamp::{OffsetMode, TimestampAdjuster};

/// Sentinel microsecond value meaning "no timestamp".
///
/// Both adjust operations pass it through unchanged, so callers can pipe
/// optional timestamps without special-casing missing ones.
pub const TIME_UNSET: i64 = i64::MIN + 1;
