//! Discard command implementation.

use super::SlotArgs;
use nvparam_storage::FileMedium;
use std::path::Path;
use tracing::info;

/// Runs the discard command.
pub fn run(path: &Path, args: &SlotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut medium = FileMedium::open(path)?;
    let slot = args.slot();

    info!("Discarding record at address {} in {:?}", slot.address(), path);
    let inverted = slot.discard(&mut medium)?;

    println!(
        "Checksum of record at address {} is now {:#04x} ({:#04x} before)",
        slot.address(),
        inverted,
        !inverted
    );
    Ok(())
}
