//! Storage medium trait definition.

use crate::error::{MediumError, MediumResult};

/// A byte-addressable non-volatile storage medium.
///
/// Mediums are **opaque byte stores** with a fixed capacity. They provide
/// random-access reads and in-place writes. nvparam owns all layout
/// interpretation - mediums do not understand records or checksums.
///
/// # Invariants
///
/// - `read_at` returns exactly the bytes last written at those addresses
/// - Bytes never written have unspecified contents
/// - Any access touching an address `>= capacity()` fails with
///   [`MediumError::OutOfBounds`] and has no effect
/// - Mediums must be `Send + Sync`
///
/// # Implementors
///
/// - [`super::InMemoryMedium`] - For testing
/// - [`super::FileMedium`] - For persistent image files
pub trait Medium: Send + Sync {
    /// Returns the total number of addressable bytes.
    fn capacity(&self) -> u64;

    /// Reads `len` bytes starting at `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The range extends beyond the capacity
    /// - An I/O error occurs
    fn read_at(&self, address: u64, len: usize) -> MediumResult<Vec<u8>>;

    /// Writes `data` starting at `address`, overwriting what was there.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The range extends beyond the capacity
    /// - An I/O error occurs
    fn write_at(&mut self, address: u64, data: &[u8]) -> MediumResult<()>;

    /// Reads a single byte.
    ///
    /// # Errors
    ///
    /// Returns an error if `address` is out of bounds or an I/O error occurs.
    fn read_byte(&self, address: u64) -> MediumResult<u8> {
        let bytes = self.read_at(address, 1)?;
        bytes
            .first()
            .copied()
            .ok_or_else(|| MediumError::out_of_bounds(address, 1, self.capacity()))
    }

    /// Writes a single byte.
    ///
    /// # Errors
    ///
    /// Returns an error if `address` is out of bounds or an I/O error occurs.
    fn write_byte(&mut self, address: u64, value: u8) -> MediumResult<()> {
        self.write_at(address, &[value])
    }

    /// Flushes pending writes to durable storage.
    ///
    /// Mediums that write through on every call keep the default no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush operation fails.
    fn flush(&mut self) -> MediumResult<()> {
        Ok(())
    }
}

/// Checks that `[address, address + len)` lies within `capacity`.
pub(crate) fn check_range(address: u64, len: usize, capacity: u64) -> MediumResult<()> {
    let end = address.checked_add(len as u64);
    match end {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(MediumError::out_of_bounds(address, len, capacity)),
    }
}
