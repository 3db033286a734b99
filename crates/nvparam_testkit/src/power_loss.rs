//! Power-loss simulation for nvparam.
//!
//! EEPROM writes are not atomic: losing power in the middle of a record
//! write leaves a mix of old and new bytes. This module wraps a medium so
//! that power can be cut after a chosen number of written bytes, letting
//! tests check that such torn records never validate.
//!
//! ## Usage
//!
//! ```rust
//! use nvparam_storage::{InMemoryMedium, Medium};
//! use nvparam_testkit::PowerLossMedium;
//!
//! let mut medium = PowerLossMedium::new(Box::new(InMemoryMedium::new()));
//! medium.cut_after(2);
//! assert!(medium.write_at(0, b"abc").is_err());
//! assert_eq!(medium.read_at(0, 3).unwrap(), [b'a', b'b', 0xFF]);
//! ```

use nvparam_storage::{Medium, MediumError, MediumResult};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// A medium wrapper that can simulate losing power mid-write.
pub struct PowerLossMedium {
    inner: Box<dyn Medium>,
    cut_after_bytes: AtomicUsize,
    bytes_written: AtomicUsize,
    lost_power: AtomicBool,
}

impl PowerLossMedium {
    /// Creates a new wrapper around an inner medium. Power is never cut
    /// until [`cut_after`](Self::cut_after) is called.
    pub fn new(inner: Box<dyn Medium>) -> Self {
        Self {
            inner,
            cut_after_bytes: AtomicUsize::new(usize::MAX),
            bytes_written: AtomicUsize::new(0),
            lost_power: AtomicBool::new(false),
        }
    }

    /// Cuts power once `bytes` more bytes have been written.
    pub fn cut_after(&self, bytes: usize) {
        let written = self.bytes_written.load(Ordering::SeqCst);
        self.cut_after_bytes
            .store(written.saturating_add(bytes), Ordering::SeqCst);
    }

    /// Restores power and clears the cut point.
    pub fn reset(&self) {
        self.cut_after_bytes.store(usize::MAX, Ordering::SeqCst);
        self.lost_power.store(false, Ordering::SeqCst);
    }

    /// Returns whether power has been lost.
    pub fn has_lost_power(&self) -> bool {
        self.lost_power.load(Ordering::SeqCst)
    }

    /// Total bytes that reached the inner medium.
    pub fn bytes_written(&self) -> usize {
        self.bytes_written.load(Ordering::SeqCst)
    }

    /// Returns the inner medium.
    pub fn into_inner(self) -> Box<dyn Medium> {
        self.inner
    }
}

impl Medium for PowerLossMedium {
    fn capacity(&self) -> u64 {
        self.inner.capacity()
    }

    fn read_at(&self, address: u64, len: usize) -> MediumResult<Vec<u8>> {
        self.inner.read_at(address, len)
    }

    fn write_at(&mut self, address: u64, data: &[u8]) -> MediumResult<()> {
        if self.has_lost_power() {
            return Err(MediumError::PowerLoss { address });
        }

        let written = self.bytes_written.load(Ordering::SeqCst);
        let threshold = self.cut_after_bytes.load(Ordering::SeqCst);
        let allowed = threshold.saturating_sub(written);

        if data.len() > allowed {
            self.lost_power.store(true, Ordering::SeqCst);
            // Bytes before the cut point still land
            if allowed > 0 {
                self.inner.write_at(address, &data[..allowed])?;
                self.bytes_written.fetch_add(allowed, Ordering::SeqCst);
            }
            return Err(MediumError::PowerLoss {
                address: address + allowed as u64,
            });
        }

        self.inner.write_at(address, data)?;
        self.bytes_written.fetch_add(data.len(), Ordering::SeqCst);
        Ok(())
    }

    fn flush(&mut self) -> MediumResult<()> {
        if self.has_lost_power() {
            return Err(MediumError::PowerLoss {
                address: self.inner.capacity(),
            });
        }
        self.inner.flush()
    }
}
