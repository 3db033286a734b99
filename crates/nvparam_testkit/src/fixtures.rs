//! Test fixtures and medium helpers.
//!
//! Provides sample records and convenience functions for setting up
//! mediums in tests.

use nvparam_codec::record;
use nvparam_storage::{FileMedium, InMemoryMedium, MediumConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

record! {
    /// The classic parameter block: four counters and a flag byte.
    ///
    /// 17 payload bytes, so a store of it spans 18 bytes.
    #[derive(Debug, PartialEq, Eq)]
    pub struct UserData {
        /// Counters.
        pub a: [u32; 4],
        /// Flag byte.
        pub b: u8,
    }
}

record! {
    /// A smaller block with signed fields.
    #[derive(Debug, PartialEq, Eq)]
    pub struct Limits {
        /// Lower bound.
        pub min: i16,
        /// Upper bound.
        pub max: i16,
        /// Mode selector.
        pub mode: u8,
    }
}

/// A known non-zero `UserData`.
pub fn sample_user_data() -> UserData {
    UserData {
        a: [1, 2, 3, 4],
        b: 42,
    }
}

/// An erased in-memory medium of the given capacity.
pub fn erased_medium(capacity: u64) -> InMemoryMedium {
    InMemoryMedium::with_config(MediumConfig::new().capacity(capacity))
        .expect("Failed to allocate medium")
}

/// An EEPROM image in a temporary directory, removed on drop.
pub struct TestImage {
    /// The medium backed by the image file.
    pub medium: FileMedium,
    temp_dir: TempDir,
}

impl TestImage {
    /// Creates an erased image with the default geometry.
    pub fn new() -> Self {
        Self::with_config(MediumConfig::default())
    }

    /// Creates an erased image with the given geometry.
    pub fn with_config(config: MediumConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("eeprom.bin");
        let medium = FileMedium::create(&path, config).expect("Failed to create image");
        Self { medium, temp_dir }
    }

    /// Path of the image file.
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join("eeprom.bin")
    }

    /// Drops the open handle and opens the image again, as after a reboot.
    pub fn reopen(self) -> Self {
        let Self { medium, temp_dir } = self;
        drop(medium);
        let medium = FileMedium::open(&temp_dir.path().join("eeprom.bin"))
            .expect("Failed to reopen image");
        Self { medium, temp_dir }
    }
}

impl Default for TestImage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TestImage {
    type Target = FileMedium;

    fn deref(&self) -> &Self::Target {
        &self.medium
    }
}

impl std::ops::DerefMut for TestImage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.medium
    }
}

/// Runs a test with an erased 1 KiB in-memory medium.
///
/// # Example
///
/// ```rust
/// use nvparam_core::RecordStore;
/// use nvparam_testkit::{with_medium, UserData};
///
/// with_medium(|medium| {
///     let mut store = RecordStore::<UserData>::new(0);
///     store.write(medium).unwrap();
///     store.read(medium).unwrap();
/// });
/// ```
pub fn with_medium<F, R>(f: F) -> R
where
    F: FnOnce(&mut InMemoryMedium) -> R,
{
    let mut medium = InMemoryMedium::new();
    f(&mut medium)
}

/// Runs a test with an erased image file.
pub fn with_image<F, R>(f: F) -> R
where
    F: FnOnce(&mut FileMedium, &Path) -> R,
{
    let mut image = TestImage::new();
    let path = image.path();
    f(&mut image.medium, &path)
}
