//! Inspect command implementation.

use super::{hex_dump, SlotArgs};
use nvparam_storage::FileMedium;
use serde::Serialize;
use std::path::Path;

/// Record inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Image path.
    pub path: String,
    /// Address of the first payload byte.
    pub address: u64,
    /// Payload size in bytes.
    pub payload_len: usize,
    /// Bytes occupied including the checksum.
    pub span: usize,
    /// Checksum algorithm used.
    pub checksum: &'static str,
    /// Payload bytes.
    pub payload: Vec<u8>,
    /// Checksum byte found in the image.
    pub stored_checksum: u8,
    /// Checksum computed over the payload.
    pub computed_checksum: u8,
    /// Whether the two agree.
    pub valid: bool,
    /// Whether the stored byte is the complement of the computed one.
    pub discarded: bool,
}

/// Reads the record described by `args` from the image at `path`.
pub fn collect(path: &Path, args: &SlotArgs) -> Result<InspectResult, Box<dyn std::error::Error>> {
    let medium = FileMedium::open(path)?;
    let slot = args.slot();
    let report = args.checksum.inspect(&slot, &medium)?;

    Ok(InspectResult {
        path: path.display().to_string(),
        address: slot.address(),
        payload_len: slot.payload_len(),
        span: slot.span(),
        checksum: args.checksum.name(),
        valid: report.is_valid(),
        discarded: report.stored == !report.computed,
        payload: report.payload,
        stored_checksum: report.stored,
        computed_checksum: report.computed,
    })
}

/// Runs the inspect command.
pub fn run(path: &Path, args: &SlotArgs, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = collect(path, args)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

fn print_text_output(result: &InspectResult) {
    println!("Image:     {}", result.path);
    println!(
        "Record:    address {}, {} payload bytes, span {}",
        result.address, result.payload_len, result.span
    );
    println!("Checksum:  {}", result.checksum);
    println!(
        "  stored   {:#04x}\n  computed {:#04x}",
        result.stored_checksum, result.computed_checksum
    );
    let status = if result.valid {
        "valid"
    } else if result.discarded {
        "discarded"
    } else {
        "invalid"
    };
    println!("Status:    {}", status);
    println!();
    println!("{}", hex_dump(&result.payload));
}
