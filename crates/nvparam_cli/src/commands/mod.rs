//! CLI command implementations.

pub mod create;
pub mod discard;
pub mod inspect;
pub mod verify;

use clap::{Args, ValueEnum};
use nvparam_core::{Checksum, Crc8Maxim, Crc8Smbus, Medium, ParamResult, RecordSlot, SlotReport};

/// Location of a record inside the image.
#[derive(Debug, Clone, Args)]
pub struct SlotArgs {
    /// Address of the first payload byte
    #[arg(short, long, default_value_t = 0)]
    pub address: u64,

    /// Payload size in bytes, excluding the checksum byte
    #[arg(short = 'l', long)]
    pub payload_len: usize,

    /// Checksum algorithm the record was written with
    #[arg(long, value_enum, default_value_t = ChecksumKind::Maxim)]
    pub checksum: ChecksumKind,
}

impl SlotArgs {
    /// The slot these arguments describe.
    pub fn slot(&self) -> RecordSlot {
        RecordSlot::new(self.address, self.payload_len)
    }
}

/// Selectable checksum algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChecksumKind {
    /// CRC-8/MAXIM-DOW
    Maxim,
    /// CRC-8/SMBUS
    Smbus,
}

impl ChecksumKind {
    /// Catalogue name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Self::Maxim => Crc8Maxim::NAME,
            Self::Smbus => Crc8Smbus::NAME,
        }
    }

    /// Reads a slot and checks it with this algorithm.
    pub fn inspect<M: Medium + ?Sized>(self, slot: &RecordSlot, medium: &M) -> ParamResult<SlotReport> {
        match self {
            Self::Maxim => slot.inspect::<Crc8Maxim, M>(medium),
            Self::Smbus => slot.inspect::<Crc8Smbus, M>(medium),
        }
    }
}

/// Formats bytes as space-separated hex, 16 per line.
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .map(|line| {
            line.iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
