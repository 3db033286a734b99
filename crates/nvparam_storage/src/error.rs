//! Error types for medium operations.

use std::io;
use thiserror::Error;

/// Result type for medium operations.
pub type MediumResult<T> = Result<T, MediumError>;

/// Errors that can occur during medium operations.
#[derive(Debug, Error)]
pub enum MediumError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Attempted to access bytes beyond the capacity of the medium.
    #[error("access beyond end of medium: address {address}, len {len}, capacity {capacity}")]
    OutOfBounds {
        /// The requested start address.
        address: u64,
        /// The requested length.
        len: usize,
        /// The capacity of the medium.
        capacity: u64,
    },

    /// Power was lost while writing; bytes from `address` on were not written.
    #[error("power lost while writing at address {address}")]
    PowerLoss {
        /// The first address that was not written.
        address: u64,
    },

    /// The image file does not match the expected geometry.
    #[error("invalid medium image: {0}")]
    InvalidImage(String),
}

impl MediumError {
    /// Creates an out-of-bounds error.
    #[must_use]
    pub fn out_of_bounds(address: u64, len: usize, capacity: u64) -> Self {
        Self::OutOfBounds {
            address,
            len,
            capacity,
        }
    }
}
