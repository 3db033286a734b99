//! Untyped on-media layout of a checksum-guarded payload.

use crate::checksum::Checksum;
use crate::error::{ParamError, ParamResult};
use nvparam_codec::CodecError;
use nvparam_storage::{Medium, MediumError};
use tracing::{debug, warn};

/// A byte range in a medium holding a payload followed by its checksum byte.
///
/// ```text
/// address .. address + payload_len - 1 : payload
/// address + payload_len                : checksum(payload)
/// ```
///
/// A slot performs no bounds checking of its own and knows nothing about
/// other slots; the medium reports out-of-range accesses and callers keep
/// slots from overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSlot {
    address: u64,
    payload_len: usize,
}

/// The raw state of a slot as found in the medium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReport {
    /// Payload bytes.
    pub payload: Vec<u8>,
    /// Checksum byte stored after the payload.
    pub stored: u8,
    /// Checksum computed over `payload`.
    pub computed: u8,
}

impl SlotReport {
    /// Whether the stored checksum matches the payload.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.stored == self.computed
    }
}

impl RecordSlot {
    /// Creates a slot for `payload_len` payload bytes starting at `address`.
    #[must_use]
    pub const fn new(address: u64, payload_len: usize) -> Self {
        Self {
            address,
            payload_len,
        }
    }

    /// Address of the first payload byte.
    #[must_use]
    pub const fn address(&self) -> u64 {
        self.address
    }

    /// Number of payload bytes.
    #[must_use]
    pub const fn payload_len(&self) -> usize {
        self.payload_len
    }

    /// Bytes occupied in the medium, payload plus checksum.
    #[must_use]
    pub const fn span(&self) -> usize {
        self.payload_len + 1
    }

    /// Address of the checksum byte, or `None` if it lies past `u64::MAX`.
    #[must_use]
    pub const fn checksum_address(&self) -> Option<u64> {
        self.address.checked_add(self.payload_len as u64)
    }

    /// First address past this slot, or `None` if it lies past `u64::MAX`.
    #[must_use]
    pub const fn end_address(&self) -> Option<u64> {
        self.address.checked_add(self.span() as u64)
    }

    fn checksum_address_in<M: Medium + ?Sized>(&self, medium: &M) -> ParamResult<u64> {
        self.checksum_address().ok_or_else(|| {
            ParamError::from(MediumError::out_of_bounds(
                self.address,
                self.span(),
                medium.capacity(),
            ))
        })
    }

    /// Reads the payload bytes.
    ///
    /// # Errors
    ///
    /// Propagates medium errors.
    pub fn read_payload<M: Medium + ?Sized>(&self, medium: &M) -> ParamResult<Vec<u8>> {
        Ok(medium.read_at(self.address, self.payload_len)?)
    }

    /// Reads the stored checksum byte.
    ///
    /// # Errors
    ///
    /// Propagates medium errors.
    pub fn read_checksum<M: Medium + ?Sized>(&self, medium: &M) -> ParamResult<u8> {
        let address = self.checksum_address_in(medium)?;
        Ok(medium.read_byte(address)?)
    }

    /// Compares the checksum of `payload` against `stored`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::ChecksumMismatch`] if they differ.
    pub fn verify<C: Checksum>(&self, payload: &[u8], stored: u8) -> ParamResult<()> {
        let computed = C::checksum(payload);
        if computed == stored {
            return Ok(());
        }

        warn!(
            "checksum mismatch at address {}: stored {:#04x}, computed {:#04x}",
            self.address, stored, computed
        );
        Err(ParamError::ChecksumMismatch {
            address: self.address,
            stored,
            computed,
        })
    }

    /// Reads payload and checksum without judging them.
    ///
    /// # Errors
    ///
    /// Propagates medium errors.
    pub fn inspect<C: Checksum, M: Medium + ?Sized>(&self, medium: &M) -> ParamResult<SlotReport> {
        let payload = self.read_payload(medium)?;
        let stored = self.read_checksum(medium)?;
        let computed = C::checksum(&payload);
        Ok(SlotReport {
            payload,
            stored,
            computed,
        })
    }

    /// Writes `payload` followed by its checksum, then flushes the medium.
    ///
    /// The payload goes first; a write interrupted before the checksum byte
    /// leaves a slot that fails verification.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SizeMismatch`] if `payload` is not exactly
    /// `payload_len` bytes, and propagates medium errors.
    pub fn write<C: Checksum, M: Medium + ?Sized>(
        &self,
        medium: &mut M,
        payload: &[u8],
    ) -> ParamResult<()> {
        if payload.len() != self.payload_len {
            return Err(CodecError::SizeMismatch {
                type_name: "payload",
                declared: self.payload_len,
                actual: payload.len(),
            }
            .into());
        }

        let checksum_address = self.checksum_address_in(medium)?;
        let checksum = C::checksum(payload);
        medium.write_at(self.address, payload)?;
        medium.write_byte(checksum_address, checksum)?;
        medium.flush()?;

        debug!(
            "wrote {} payload bytes at address {} with checksum {:#04x}",
            self.payload_len, self.address, checksum
        );
        Ok(())
    }

    /// Invalidates the slot by complementing its stored checksum.
    ///
    /// The payload is left untouched and the medium is flushed. Returns the
    /// byte now stored. Applying this twice restores the original checksum.
    ///
    /// # Errors
    ///
    /// Propagates medium errors.
    pub fn discard<M: Medium + ?Sized>(&self, medium: &mut M) -> ParamResult<u8> {
        let checksum_address = self.checksum_address_in(medium)?;
        let stored = medium.read_byte(checksum_address)?;
        let inverted = !stored;
        medium.write_byte(checksum_address, inverted)?;
        medium.flush()?;

        debug!(
            "discarded record at address {}: checksum {:#04x} -> {:#04x}",
            self.address, stored, inverted
        );
        Ok(inverted)
    }
}
