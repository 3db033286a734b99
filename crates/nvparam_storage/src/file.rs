//! File-based storage medium holding an EEPROM image.

use crate::config::MediumConfig;
use crate::error::{MediumError, MediumResult};
use crate::medium::{check_range, Medium};
use parking_lot::RwLock;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A file-based storage medium.
///
/// The file is a raw image of the medium: byte `n` of the file is address `n`.
/// The capacity is fixed when the image is created and equals the file length.
///
/// # Durability
///
/// - Writes go straight to the OS with `write_all`
/// - `flush()` calls `File::sync_all()` to ensure data is on disk
///
/// # Thread Safety
///
/// This medium is thread-safe and can be shared across threads.
/// Internal locking ensures consistent access.
///
/// # Example
///
/// ```no_run
/// use nvparam_storage::{FileMedium, Medium, MediumConfig};
/// use std::path::Path;
///
/// let mut medium = FileMedium::create(Path::new("eeprom.bin"), MediumConfig::default()).unwrap();
/// medium.write_at(0, b"persistent data").unwrap();
/// medium.flush().unwrap();
/// ```
#[derive(Debug)]
pub struct FileMedium {
    path: PathBuf,
    file: RwLock<File>,
    capacity: u64,
}

impl FileMedium {
    /// Creates a new erased image at the given path.
    ///
    /// An existing file at `path` is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity does not fit in memory on this host,
    /// or if the file cannot be created or written.
    pub fn create(path: &Path, config: MediumConfig) -> MediumResult<Self> {
        let len = config.buffer_len()?;
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        let blank = vec![config.erase_byte; len];
        file.write_all(&blank)?;
        file.sync_all()?;

        Ok(Self {
            path: path.to_path_buf(),
            file: RwLock::new(file),
            capacity: config.capacity,
        })
    }

    /// Opens an existing image.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is empty.
    pub fn open(path: &Path) -> MediumResult<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let capacity = file.metadata()?.len();

        if capacity == 0 {
            return Err(MediumError::InvalidImage(format!(
                "{} is empty",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
            file: RwLock::new(file),
            capacity,
        })
    }

    /// Opens the image at `path`, creating an erased one if it does not exist.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot
    /// be opened or created.
    pub fn open_or_create(path: &Path, config: MediumConfig) -> MediumResult<Self> {
        if path.exists() {
            return Self::open(path);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::create(path, config)
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Medium for FileMedium {
    fn capacity(&self) -> u64 {
        self.capacity
    }

    fn read_at(&self, address: u64, len: usize) -> MediumResult<Vec<u8>> {
        check_range(address, len, self.capacity)?;

        if len == 0 {
            return Ok(Vec::new());
        }

        let mut file = self.file.write();
        file.seek(SeekFrom::Start(address))?;

        let mut buffer = vec![0u8; len];
        file.read_exact(&mut buffer)?;

        Ok(buffer)
    }

    fn write_at(&mut self, address: u64, data: &[u8]) -> MediumResult<()> {
        check_range(address, data.len(), self.capacity)?;

        if data.is_empty() {
            return Ok(());
        }

        let mut file = self.file.write();
        file.seek(SeekFrom::Start(address))?;
        file.write_all(data)?;

        Ok(())
    }

    fn flush(&mut self) -> MediumResult<()> {
        let mut file = self.file.write();
        file.flush()?;
        file.sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn small() -> MediumConfig {
        MediumConfig::new().capacity(64)
    }

    #[test]
    fn file_create_is_erased() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eeprom.bin");

        let medium = FileMedium::create(&path, small()).unwrap();
        assert_eq!(medium.capacity(), 64);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 64);
        assert_eq!(medium.read_at(0, 64).unwrap(), vec![0xFF; 64]);
    }

    #[test]
    fn file_write_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eeprom.bin");

        let mut medium = FileMedium::create(&path, small()).unwrap();
        medium.write_at(5, b"hello").unwrap();
        medium.write_byte(10, b'!').unwrap();

        assert_eq!(medium.read_at(5, 6).unwrap(), b"hello!");
        assert_eq!(medium.read_byte(4).unwrap(), 0xFF);
    }

    #[test]
    fn file_out_of_bounds_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eeprom.bin");

        let mut medium = FileMedium::create(&path, small()).unwrap();

        assert!(matches!(
            medium.read_at(60, 5),
            Err(MediumError::OutOfBounds { .. })
        ));
        assert!(matches!(
            medium.write_at(63, b"xy"),
            Err(MediumError::OutOfBounds { .. })
        ));
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 64);
    }

    #[test]
    fn file_persistence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eeprom.bin");

        {
            let mut medium = FileMedium::create(&path, small()).unwrap();
            medium.write_at(32, b"persistent data").unwrap();
            medium.flush().unwrap();
        }

        {
            let medium = FileMedium::open(&path).unwrap();
            assert_eq!(medium.capacity(), 64);
            assert_eq!(medium.read_at(32, 15).unwrap(), b"persistent data");
        }
    }

    #[test]
    fn file_open_missing_fails() {
        let dir = tempdir().unwrap();
        let result = FileMedium::open(&dir.path().join("missing.bin"));
        assert!(matches!(result, Err(MediumError::Io(_))));
    }

    #[test]
    fn file_open_empty_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        std::fs::write(&path, b"").unwrap();

        let result = FileMedium::open(&path);
        assert!(matches!(result, Err(MediumError::InvalidImage(_))));
    }

    #[test]
    fn file_open_or_create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("eeprom.bin");

        let mut medium = FileMedium::open_or_create(&path, small()).unwrap();
        medium.write_byte(0, 7).unwrap();
        drop(medium);

        let medium = FileMedium::open_or_create(&path, small()).unwrap();
        assert_eq!(medium.read_byte(0).unwrap(), 7);
    }

    #[test]
    fn file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eeprom.bin");

        let medium = FileMedium::create(&path, small()).unwrap();
        assert_eq!(medium.path(), path);
    }
}
