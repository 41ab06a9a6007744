#![doc(html_root_url = "https://docs.rs/demuxkit/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

//! # demuxkit - Bitstream Extraction for Demuxers
//!
//! `demuxkit` is the bit-precise core that container and demuxer code
//! builds on. It reads codec-initialization blobs bit by bit, splits
//! start-code-delimited elementary-stream units, builds RFC 6381 codec
//! identifier strings, and normalizes the wrapping 33-bit 90 kHz clock
//! found in transport containers into a single monotonic microsecond
//! timeline that multiple producer threads can share.
//!
//! ## Features
//!
//! ### Codec Initialization Parsing
//! - ALAC magic cookie extraction (sample rate, channel count)
//! - MPEG-4 Visual object layer headers (frame dimensions)
//! - AVC/HEVC codec identifier strings per RFC 6381
//! - Annex B NAL unit splitting and construction
//!
//! ### Timeline Normalization
//! - 33-bit PTS wraparound correction
//! - Lazily resolved source-to-output offsets
//! - A shared mode where N producer threads agree on one offset
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! demuxkit = "0.1.0"
//! ```
//!
//! ### Splitting a Parameter-Set Blob
//!
//! ```rust
//! use demuxkit::codec::nal;
//!
//! let stream = [0, 0, 0, 1, 0x67, 0x64, 0, 0, 0, 1, 0x68, 0xEE];
//! let units = nal::split_nal_units(&stream).expect("leading start code");
//!
//! assert_eq!(units.len(), 2);
//! assert_eq!(&units[1][..], &[0, 0, 0, 1, 0x68, 0xEE]);
//! ```
//!
//! ### Normalizing a Wrapping Clock
//!
//! ```rust
//! use demuxkit::av::{OffsetMode, TimestampAdjuster};
//!
//! let adjuster = TimestampAdjuster::new(OffsetMode::FirstSampleAt(0));
//!
//! // 90,000 ticks is one second of 90 kHz clock
//! assert_eq!(adjuster.adjust_ts_timestamp(90_000), 0);
//! assert_eq!(adjuster.adjust_ts_timestamp(180_000), 1_000_000);
//! ```
//!
//! ## Module Overview
//!
//! - `av`: timeline types, the timestamp adjuster and the
//!   [`TIME_UNSET`](av::TIME_UNSET) sentinel
//!
//! - `codec`: per-grammar extraction of codec-initialization values
//!   - ALAC magic cookies
//!   - MPEG-4 Visual object layers
//!   - NAL unit utilities and RFC 6381 identifier strings
//!
//! - `error`: the [`DemuxError`] type with its two classification axes
//!   (malformed vs. unsupported, and the kind of data concerned)
//!
//! - `utils`: the [`BitReader`](utils::BitReader) bit cursor that the
//!   parsers are layered on

/// Timeline types and timestamp normalization
pub mod av;

/// Codec initialization parsing and elementary-stream utilities
pub mod codec;

/// Error types and utilities
pub mod error;

/// Common utilities and helper functions
pub mod utils;

pub use error::{DataKind, DemuxError, Result};
