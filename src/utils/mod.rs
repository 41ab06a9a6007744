//! # Utility Types
//!
//! Common low-level plumbing shared by the codec parsers. The central piece
//! is [`BitReader`], a bit-granularity cursor over an owned byte buffer:
//!
//! ```rust
//! use demuxkit::utils::BitReader;
//!
//! let mut reader = BitReader::new(vec![0b1011_0011]);
//!
//! // Read a 3-bit field (101)
//! let value = reader.read_bits(3);
//! assert_eq!(value, 0b101);
//! ```

/// Bit manipulation and bitstream reading utilities
pub mod bits;

// Re-export commonly used types
pub use bits::BitReader;
