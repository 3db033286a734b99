//! # nvparam Core
//!
//! Checksum-guarded typed records in byte-addressable non-volatile storage.
//!
//! This crate provides:
//! - [`RecordStore`], binding a [`Record`] type to an address in a [`Medium`]
//!   with read/write/discard semantics
//! - [`RecordSlot`], the untyped layout underneath it
//! - [`Checksum`] and the CRC-8 algorithms guarding payloads
//!
//! ## On-media layout
//!
//! ```text
//! address .. address + T::SIZE - 1 : encoded record
//! address + T::SIZE                : crc8(encoded record)
//! ```
//!
//! A read of a record that was never written, was discarded, or was damaged
//! fails with [`ParamError::ChecksumMismatch`]. There is no automatic
//! recovery; [`RecordStore::read_or_default`] is the usual remedy.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod checksum;
mod error;
mod slot;
mod store;

pub use checksum::{Checksum, Crc8, Crc8Maxim, Crc8Smbus};
pub use error::{ParamError, ParamResult};
pub use slot::{RecordSlot, SlotReport};
pub use store::RecordStore;

pub use nvparam_codec::{record, Record};
pub use nvparam_storage::{Medium, MediumError};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
