//! Medium geometry configuration.

use crate::error::{MediumError, MediumResult};

/// Capacity of a freshly configured medium, the EEPROM size of common
/// 8-bit microcontrollers.
pub const DEFAULT_CAPACITY: u64 = 1024;

/// The value an erased EEPROM cell reads as.
pub const ERASED_BYTE: u8 = 0xFF;

/// Configuration for creating a medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediumConfig {
    /// Number of addressable bytes.
    pub capacity: u64,

    /// Value every byte holds before it is first written.
    pub erase_byte: u8,
}

impl Default for MediumConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            erase_byte: ERASED_BYTE,
        }
    }
}

impl MediumConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity in bytes.
    #[must_use]
    pub const fn capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the erase byte.
    #[must_use]
    pub const fn erase_byte(mut self, value: u8) -> Self {
        self.erase_byte = value;
        self
    }

    /// The capacity as a buffer length on this host.
    ///
    /// # Errors
    ///
    /// Returns [`MediumError::InvalidImage`] if the capacity does not fit in
    /// `usize`.
    pub fn buffer_len(&self) -> MediumResult<usize> {
        usize::try_from(self.capacity).map_err(|_| {
            MediumError::InvalidImage(format!(
                "capacity {} exceeds the host address space",
                self.capacity
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = MediumConfig::default();
        assert_eq!(config.capacity, 1024);
        assert_eq!(config.erase_byte, 0xFF);
    }

    #[test]
    fn builder_pattern() {
        let config = MediumConfig::new().capacity(4096).erase_byte(0x00);

        assert_eq!(config.capacity, 4096);
        assert_eq!(config.erase_byte, 0x00);
    }

    #[test]
    fn buffer_len_matches_capacity() {
        assert_eq!(MediumConfig::new().capacity(64).buffer_len().unwrap(), 64);
        assert_eq!(MediumConfig::default().buffer_len().unwrap(), 1024);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn buffer_len_rejects_capacity_past_usize() {
        let err = MediumConfig::new().capacity(u64::MAX).buffer_len().unwrap_err();
        assert!(matches!(err, MediumError::InvalidImage(_)));
    }
}
