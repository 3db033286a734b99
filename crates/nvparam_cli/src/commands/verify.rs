//! Verify command implementation.

use super::SlotArgs;
use nvparam_core::ParamError;
use nvparam_storage::FileMedium;
use std::path::Path;

/// Checks the record described by `args`.
pub fn check(path: &Path, args: &SlotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let medium = FileMedium::open(path)?;
    let slot = args.slot();
    let report = args.checksum.inspect(&slot, &medium)?;

    if report.is_valid() {
        return Ok(());
    }
    Err(ParamError::ChecksumMismatch {
        address: slot.address(),
        stored: report.stored,
        computed: report.computed,
    }
    .into())
}

/// Runs the verify command.
pub fn run(path: &Path, args: &SlotArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "Verifying record at address {} ({} bytes) in {:?}",
        args.address, args.payload_len, path
    );

    match check(path, args) {
        Ok(()) => {
            println!("✓ Record verification passed");
            Ok(())
        }
        Err(err) => {
            println!("✗ Record verification failed: {}", err);
            Err("Verification failed".into())
        }
    }
}
