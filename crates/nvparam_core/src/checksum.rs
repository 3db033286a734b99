//! 8-bit checksums guarding stored payloads.

/// A deterministic 8-bit checksum over a payload.
///
/// Implementations are pure: identical input always yields identical output.
pub trait Checksum {
    /// Catalogue name of the algorithm.
    const NAME: &'static str;

    /// Computes the checksum of `bytes`.
    fn checksum(bytes: &[u8]) -> u8;
}

/// CRC-8/MAXIM-DOW (Dallas 1-Wire): polynomial 0x31, reflected, init 0.
///
/// Check value for `"123456789"` is `0xA1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crc8Maxim;

/// CRC-8/SMBUS: polynomial 0x07, init 0.
///
/// Check value for `"123456789"` is `0xF4`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crc8Smbus;

/// The checksum used when none is named.
pub type Crc8 = Crc8Maxim;

const MAXIM_TABLE: [u8; 256] = reflected_table(0x8C);
const SMBUS_TABLE: [u8; 256] = msb_first_table(0x07);

const fn reflected_table(poly: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x01 != 0 {
                (crc >> 1) ^ poly
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

const fn msb_first_table(poly: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ poly
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

// For an 8-bit register both bit orders reduce to one table lookup per byte.
fn run_table(table: &[u8; 256], bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0u8, |crc, &byte| table[usize::from(crc ^ byte)])
}

impl Checksum for Crc8Maxim {
    const NAME: &'static str = "CRC-8/MAXIM-DOW";

    fn checksum(bytes: &[u8]) -> u8 {
        run_table(&MAXIM_TABLE, bytes)
    }
}

impl Checksum for Crc8Smbus {
    const NAME: &'static str = "CRC-8/SMBUS";

    fn checksum(bytes: &[u8]) -> u8 {
        run_table(&SMBUS_TABLE, bytes)
    }
}
