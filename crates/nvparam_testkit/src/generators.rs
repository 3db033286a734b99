//! Property-based test generators using proptest.
//!
//! Provides strategies for generating records, payloads, addresses and
//! corruptions.

use crate::fixtures::{Limits, UserData};
use proptest::prelude::*;

/// Strategy for arbitrary `UserData` values.
pub fn user_data_strategy() -> impl Strategy<Value = UserData> {
    (prop::array::uniform4(any::<u32>()), any::<u8>()).prop_map(|(a, b)| UserData { a, b })
}

/// Strategy for arbitrary `Limits` values.
pub fn limits_strategy() -> impl Strategy<Value = Limits> {
    (any::<i16>(), any::<i16>(), any::<u8>()).prop_map(|(min, max, mode)| Limits { min, max, mode })
}

/// Strategy for raw payloads of exactly `len` bytes.
pub fn payload_strategy(len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), len)
}

/// Strategy for base addresses at which a record of `span` bytes fits in
/// `capacity` bytes.
pub fn address_strategy(span: usize, capacity: u64) -> impl Strategy<Value = u64> {
    0..=(capacity - span as u64)
}

/// A single flipped bit inside a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitFlip {
    /// Byte offset within the payload.
    pub byte: usize,
    /// Bit index within the byte.
    pub bit: u8,
}

impl BitFlip {
    /// The mask to XOR into the byte.
    pub fn mask(&self) -> u8 {
        1 << self.bit
    }
}

/// Strategy for a single-bit flip within a payload of `len` bytes.
pub fn bit_flip_strategy(len: usize) -> impl Strategy<Value = BitFlip> {
    (0..len, 0u8..8).prop_map(|(byte, bit)| BitFlip { byte, bit })
}
