//! Error types for nvparam core.

use thiserror::Error;

/// Result type for core operations.
pub type ParamResult<T> = Result<T, ParamError>;

/// Errors that can occur in record store operations.
#[derive(Debug, Error)]
pub enum ParamError {
    /// The stored checksum does not match the stored payload.
    ///
    /// The record was never written, was discarded, or is corrupted.
    #[error("checksum mismatch at address {address}: stored {stored:02x}, computed {computed:02x}")]
    ChecksumMismatch {
        /// Base address of the record.
        address: u64,
        /// Checksum byte found in the medium.
        stored: u8,
        /// Checksum computed over the payload found in the medium.
        computed: u8,
    },

    /// Storage medium error.
    #[error("medium error: {0}")]
    Medium(#[from] nvparam_storage::MediumError),

    /// Record codec error.
    #[error("codec error: {0}")]
    Codec(#[from] nvparam_codec::CodecError),
}

impl ParamError {
    /// Returns `true` for [`ParamError::ChecksumMismatch`].
    #[must_use]
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, Self::ChecksumMismatch { .. })
    }
}
