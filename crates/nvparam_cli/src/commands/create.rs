//! Create command implementation.

use nvparam_storage::{FileMedium, MediumConfig};
use std::path::Path;
use tracing::info;

/// Runs the create command.
pub fn run(path: &Path, capacity: u64, fill: u8) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        return Err(format!("Image already exists at {:?}", path).into());
    }

    info!("Creating {} byte image at {:?}", capacity, path);
    let config = MediumConfig::new().capacity(capacity).erase_byte(fill);
    FileMedium::open_or_create(path, config)?;

    println!("Created {:?} ({} bytes, filled with {:#04x})", path, capacity, fill);
    Ok(())
}
