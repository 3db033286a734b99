//! # nvparam Storage
//!
//! Storage medium trait and implementations for nvparam.
//!
//! This crate provides the lowest-level storage abstraction for nvparam.
//! A medium is a **fixed-capacity, byte-addressable store** in the style of an
//! EEPROM: any byte can be read or overwritten in place, and the contents
//! survive power cycles. Mediums do not interpret the data they store.
//!
//! ## Design Principles
//!
//! - Mediums are simple random-access byte stores (read, write, flush)
//! - Contents before the first write are unspecified; callers must not
//!   assume zeroed memory
//! - No knowledge of record layouts or checksums
//! - Must be `Send + Sync` so one medium can back many records
//!
//! ## Available Mediums
//!
//! - [`InMemoryMedium`] - For testing and ephemeral storage
//! - [`FileMedium`] - An EEPROM image kept in a file
//!
//! ## Example
//!
//! ```rust
//! use nvparam_storage::{InMemoryMedium, Medium};
//!
//! let mut medium = InMemoryMedium::new();
//! medium.write_at(16, b"hello").unwrap();
//! assert_eq!(medium.read_at(16, 5).unwrap(), b"hello");
//! assert_eq!(medium.read_byte(0).unwrap(), 0xFF);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod file;
mod medium;
mod memory;

pub use config::{MediumConfig, DEFAULT_CAPACITY, ERASED_BYTE};
pub use error::{MediumError, MediumResult};
pub use file::FileMedium;
pub use medium::Medium;
pub use memory::InMemoryMedium;
