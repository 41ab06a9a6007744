use std::fmt;
use thiserror::Error;

/// The coarse kind of data an error concerns.
///
/// Classifies failures independently of whether the data was malformed or
/// merely unsupported, so callers can route errors without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    /// Container or elementary-stream structure.
    Container,
    /// Codec initialization data (magic cookies, codec-specific data blobs).
    CodecInit,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataKind::Container => f.write_str("container"),
            DataKind::CodecInit => f.write_str("codec init"),
        }
    }
}

/// Errors produced while extracting values from media bitstreams.
///
/// Two axes are encoded: whether the input violates its own format
/// ([`Malformed`](DemuxError::Malformed)) or is legally formed but exercises
/// a feature this crate does not handle
/// ([`Unsupported`](DemuxError::Unsupported)), and which [`DataKind`] the
/// failure concerns. Precondition violations inside
/// [`BitReader`](crate::utils::BitReader) are caller bugs and panic instead
/// of surfacing here.
#[derive(Error, Debug)]
pub enum DemuxError {
    /// The bitstream violates its own format.
    #[error("malformed {kind} data: {message}")]
    Malformed {
        /// Kind of data the malformed structure belongs to.
        kind: DataKind,
        /// Description of the violated structural requirement.
        message: String,
    },

    /// Legally formed input using a feature this crate does not handle.
    #[error("unsupported {kind} feature: {message}")]
    Unsupported {
        /// Kind of data carrying the unhandled feature.
        kind: DataKind,
        /// Description of the unhandled feature.
        message: String,
    },

    /// A blocking wait was cancelled before the shared timestamp offset
    /// resolved.
    #[error("interrupted while waiting for the shared timestamp offset")]
    Interrupted,
}

impl DemuxError {
    /// Creates a [`DemuxError::Malformed`] for the given data kind.
    pub fn malformed(kind: DataKind, message: impl Into<String>) -> Self {
        DemuxError::Malformed {
            kind,
            message: message.into(),
        }
    }

    /// Creates a [`DemuxError::Unsupported`] for the given data kind.
    pub fn unsupported(kind: DataKind, message: impl Into<String>) -> Self {
        DemuxError::Unsupported {
            kind,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DemuxError>;
