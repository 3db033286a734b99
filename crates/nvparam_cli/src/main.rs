//! nvparam CLI
//!
//! Command-line tools for EEPROM images holding nvparam records.
//!
//! # Commands
//!
//! - `create` - Create an erased image
//! - `inspect` - Display the payload and checksums of a record
//! - `verify` - Check a record's checksum
//! - `discard` - Invalidate a record by complementing its checksum

mod commands;

use clap::{Parser, Subcommand};
use commands::SlotArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// nvparam command-line image tools.
#[derive(Parser)]
#[command(name = "nvparam")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the EEPROM image file
    #[arg(global = true, short, long)]
    image: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an erased image
    Create {
        /// Capacity in bytes
        #[arg(short, long, default_value_t = nvparam_storage::DEFAULT_CAPACITY)]
        capacity: u64,

        /// Value of every byte in the new image
        #[arg(short, long, default_value_t = nvparam_storage::ERASED_BYTE)]
        fill: u8,
    },

    /// Display the payload and checksums of a record
    Inspect {
        #[command(flatten)]
        slot: SlotArgs,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a record's checksum
    Verify {
        #[command(flatten)]
        slot: SlotArgs,
    },

    /// Invalidate a record by complementing its checksum
    Discard {
        #[command(flatten)]
        slot: SlotArgs,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Create { capacity, fill } => {
            let path = cli.image.ok_or("Image path required for create")?;
            commands::create::run(&path, capacity, fill)?;
        }
        Commands::Inspect { slot, format } => {
            let path = cli.image.ok_or("Image path required for inspect")?;
            commands::inspect::run(&path, &slot, &format)?;
        }
        Commands::Verify { slot } => {
            let path = cli.image.ok_or("Image path required for verify")?;
            commands::verify::run(&path, &slot)?;
        }
        Commands::Discard { slot } => {
            let path = cli.image.ok_or("Image path required for discard")?;
            commands::discard::run(&path, &slot)?;
        }
        Commands::Version => {
            println!("nvparam CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("nvparam core v{}", nvparam_core::VERSION);
        }
    }

    Ok(())
}
