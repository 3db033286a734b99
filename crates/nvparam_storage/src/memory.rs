//! In-memory storage medium for testing.

use crate::config::{MediumConfig, DEFAULT_CAPACITY, ERASED_BYTE};
use crate::error::MediumResult;
use crate::medium::{check_range, Medium};
use parking_lot::RwLock;

/// An in-memory storage medium.
///
/// This medium keeps a fixed-size byte array in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Hosts without real non-volatile storage
///
/// A new medium is filled with the configured erase byte, like a blank EEPROM.
///
/// # Thread Safety
///
/// This medium is thread-safe and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use nvparam_storage::{InMemoryMedium, Medium, MediumConfig};
///
/// let mut medium = InMemoryMedium::with_config(MediumConfig::new().capacity(64)).unwrap();
/// medium.write_byte(3, 42).unwrap();
/// assert_eq!(medium.capacity(), 64);
/// assert_eq!(medium.read_byte(3).unwrap(), 42);
/// ```
#[derive(Debug)]
pub struct InMemoryMedium {
    data: RwLock<Vec<u8>>,
    erase_byte: u8,
}

impl Default for InMemoryMedium {
    fn default() -> Self {
        Self {
            data: RwLock::new(vec![ERASED_BYTE; DEFAULT_CAPACITY as usize]),
            erase_byte: ERASED_BYTE,
        }
    }
}

impl InMemoryMedium {
    /// Creates a new erased medium with the default geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new erased medium with the given geometry.
    ///
    /// # Errors
    ///
    /// Returns [`MediumError::InvalidImage`](crate::MediumError::InvalidImage)
    /// if the capacity does not fit in memory on this host.
    pub fn with_config(config: MediumConfig) -> MediumResult<Self> {
        Ok(Self {
            data: RwLock::new(vec![config.erase_byte; config.buffer_len()?]),
            erase_byte: config.erase_byte,
        })
    }

    /// Creates a medium holding pre-existing contents.
    ///
    /// The capacity is the length of `data`. Useful for testing
    /// recovery scenarios.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            data: RwLock::new(data),
            erase_byte: MediumConfig::default().erase_byte,
        }
    }

    /// Returns a copy of the whole medium.
    ///
    /// Useful for testing and debugging.
    #[must_use]
    pub fn data(&self) -> Vec<u8> {
        self.data.read().clone()
    }

    /// Resets every byte to the erase byte.
    pub fn erase(&mut self) {
        let erase_byte = self.erase_byte;
        self.data.write().fill(erase_byte);
    }
}

impl Medium for InMemoryMedium {
    fn capacity(&self) -> u64 {
        self.data.read().len() as u64
    }

    fn read_at(&self, address: u64, len: usize) -> MediumResult<Vec<u8>> {
        let data = self.data.read();
        check_range(address, len, data.len() as u64)?;

        let start = address as usize;
        Ok(data[start..start + len].to_vec())
    }

    fn write_at(&mut self, address: u64, bytes: &[u8]) -> MediumResult<()> {
        let mut data = self.data.write();
        check_range(address, bytes.len(), data.len() as u64)?;

        let start = address as usize;
        data[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}
