//! # nvparam Testkit
//!
//! Test utilities for nvparam.
//!
//! This crate provides:
//! - Fixture records and medium helpers
//! - Property-based test generators using proptest
//! - A medium wrapper that simulates power loss mid-write
//! - On-media layout test vectors
//!
//! ## Usage
//!
//! ```rust
//! use nvparam_core::RecordStore;
//! use nvparam_testkit::prelude::*;
//!
//! let mut medium = erased_medium(64);
//! let mut store = RecordStore::<UserData>::new(0);
//! store.set_data(sample_user_data());
//! store.write(&mut medium).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod power_loss;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::power_loss::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use power_loss::*;
pub use vectors::*;
