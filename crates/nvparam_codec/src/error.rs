//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during encoding or decoding.
///
/// Every variant points at a [`crate::Record`] implementation whose
/// `encode`/`decode` disagree with its declared `SIZE`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A record produced or consumed a different number of bytes than it declares.
    #[error("record {type_name} declares {declared} bytes but {actual} were used")]
    SizeMismatch {
        /// Name of the record type.
        type_name: &'static str,
        /// The declared `Record::SIZE`.
        declared: usize,
        /// The number of bytes actually produced or consumed.
        actual: usize,
    },

    /// Decoding ran past the end of the payload.
    #[error("unexpected end of payload: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes requested by the decoder.
        needed: usize,
        /// Bytes left in the payload.
        remaining: usize,
    },
}

impl CodecError {
    /// Creates a size mismatch error for the record type `T`.
    pub fn size_mismatch<T>(declared: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            type_name: std::any::type_name::<T>(),
            declared,
            actual,
        }
    }
}
