//! Typed record store.

use crate::checksum::{Checksum, Crc8};
use crate::error::ParamResult;
use crate::slot::RecordSlot;
use nvparam_codec::{decode_record, encode_record, Record};
use nvparam_storage::Medium;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use tracing::info;

/// Binds a record type `T` to a fixed address in a medium.
///
/// The store owns an in-memory working copy of the record. All changes are
/// made to the working copy and only reach the medium on [`write`](Self::write).
/// The persisted form is the encoded record followed by one checksum byte
/// computed with `C`.
///
/// The store holds no reference to the medium; every operation that touches
/// storage borrows it, so one medium can back any number of stores at
/// disjoint addresses. Use [`record_span`](Self::record_span) or
/// [`end_address`](Self::end_address) to lay them out.
///
/// # Example
///
/// ```rust
/// use nvparam_core::{record, RecordStore};
/// use nvparam_storage::InMemoryMedium;
///
/// record! {
///     #[derive(Debug, PartialEq)]
///     pub struct UserData {
///         pub a: [u32; 4],
///         pub b: u8,
///     }
/// }
///
/// let mut medium = InMemoryMedium::new();
/// let mut param = RecordStore::<UserData>::new(0);
///
/// // A blank medium never validates.
/// assert!(param.read(&medium).is_err());
///
/// param.clear();
/// param.b = 42;
/// param.write(&mut medium).unwrap();
///
/// let mut again = RecordStore::<UserData>::new(0);
/// again.read(&medium).unwrap();
/// assert_eq!(again.b, 42);
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record, C: Checksum = Crc8> {
    slot: RecordSlot,
    data: T,
    _checksum: PhantomData<C>,
}

impl<T: Record> RecordStore<T> {
    /// Creates a store at `address` using the default checksum.
    ///
    /// The working copy starts zeroed. The medium is not touched.
    #[must_use]
    pub fn new(address: u64) -> Self {
        Self::with_checksum(address)
    }
}

impl<T: Record, C: Checksum> RecordStore<T, C> {
    /// Bytes a store of this type occupies in the medium.
    pub const SPAN: usize = T::SIZE + 1;

    /// Creates a store at `address` that guards its payload with `C`.
    ///
    /// The working copy starts zeroed. The medium is not touched.
    #[must_use]
    pub fn with_checksum(address: u64) -> Self {
        Self {
            slot: RecordSlot::new(address, T::SIZE),
            data: T::zeroed(),
            _checksum: PhantomData,
        }
    }

    /// Zeroes the working copy. The medium and its checksum are untouched.
    pub fn clear(&mut self) {
        self.data = T::zeroed();
    }

    /// Loads the record from the medium and verifies its checksum.
    ///
    /// The working copy is overwritten with the stored payload whether or not
    /// the checksum matches; after a failed read it must not be trusted.
    ///
    /// With the default checksum a run of zero bytes checksums to zero, so a
    /// medium whose cells start out as 0x00 reads as a valid zeroed record
    /// before anything was written. A 0xFF-erased part does not validate.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::ChecksumMismatch`](crate::ParamError::ChecksumMismatch)
    /// if the record was never written, was discarded, or is corrupted.
    /// Medium errors are propagated.
    pub fn read<M: Medium + ?Sized>(&mut self, medium: &M) -> ParamResult<()> {
        let payload = self.slot.read_payload(medium)?;
        self.data = decode_record(&payload)?;
        let stored = self.slot.read_checksum(medium)?;
        self.slot.verify::<C>(&payload, stored)
    }

    /// Persists the working copy followed by a fresh checksum.
    ///
    /// Any value of the working copy is accepted.
    ///
    /// # Errors
    ///
    /// Propagates medium errors.
    pub fn write<M: Medium + ?Sized>(&self, medium: &mut M) -> ParamResult<()> {
        let payload = encode_record(&self.data)?;
        self.slot.write::<C, M>(medium, &payload)
    }

    /// Invalidates the stored record by complementing its checksum byte.
    ///
    /// The payload stays in place. The next [`read`](Self::read) fails unless
    /// the payload's checksum happens to equal the complement, which an 8-bit
    /// checksum cannot rule out. Discarding twice restores the original byte.
    ///
    /// # Errors
    ///
    /// Propagates medium errors.
    pub fn discard<M: Medium + ?Sized>(&self, medium: &mut M) -> ParamResult<()> {
        self.slot.discard(medium)?;
        Ok(())
    }

    /// Checks the stored record without touching the working copy.
    ///
    /// # Errors
    ///
    /// Propagates medium errors.
    pub fn is_valid<M: Medium + ?Sized>(&self, medium: &M) -> ParamResult<bool> {
        Ok(self.slot.inspect::<C, M>(medium)?.is_valid())
    }

    /// Reads the record, or initializes it if the stored copy is invalid.
    ///
    /// On a checksum mismatch the working copy is cleared and written back,
    /// so the medium holds a valid zeroed record afterwards. Returns whether
    /// the stored record was valid.
    ///
    /// # Errors
    ///
    /// Propagates medium and codec errors.
    pub fn read_or_default<M: Medium + ?Sized>(&mut self, medium: &mut M) -> ParamResult<bool> {
        match self.read(&*medium) {
            Ok(()) => Ok(true),
            Err(err) if err.is_checksum_mismatch() => {
                info!(
                    "initializing record at address {} after: {}",
                    self.slot.address(),
                    err
                );
                self.clear();
                self.write(medium)?;
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Bytes this store occupies in the medium, payload plus checksum.
    #[must_use]
    pub fn record_span(&self) -> usize {
        Self::SPAN
    }

    /// Address of the first payload byte.
    #[must_use]
    pub fn address(&self) -> u64 {
        self.slot.address()
    }

    /// First address past this store, where the next one may begin.
    ///
    /// `None` if the store reaches the end of the address space.
    #[must_use]
    pub fn end_address(&self) -> Option<u64> {
        self.slot.end_address()
    }

    /// The untyped layout of this store.
    #[must_use]
    pub fn slot(&self) -> RecordSlot {
        self.slot
    }

    /// The working copy.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The working copy, for modification.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replaces the working copy.
    pub fn set_data(&mut self, data: T) {
        self.data = data;
    }

    /// Consumes the store and returns the working copy.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Record, C: Checksum> Deref for RecordStore<T, C> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T: Record, C: Checksum> DerefMut for RecordStore<T, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
