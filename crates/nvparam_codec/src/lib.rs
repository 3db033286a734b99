//! # nvparam Codec
//!
//! Fixed-width field encoding for nvparam records.
//!
//! A record is a plain, fixed-size, copyable value. Its payload is the
//! concatenation of its fields in declaration order:
//! - Integers and floats are little-endian at their natural width
//! - Arrays are their elements back to back
//! - There is never any padding
//!
//! The layout therefore does not depend on the compiler's in-memory
//! representation of the type, and the same record decodes identically on
//! every host.
//!
//! ## Usage
//!
//! ```
//! use nvparam_codec::{decode_record, encode_record, record, Record};
//!
//! record! {
//!     /// Calibration block.
//!     #[derive(Debug, PartialEq)]
//!     pub struct Calibration {
//!         pub offsets: [u32; 4],
//!         pub gain: u8,
//!     }
//! }
//!
//! assert_eq!(Calibration::SIZE, 17);
//!
//! let value = Calibration { offsets: [1, 2, 3, 4], gain: 42 };
//! let bytes = encode_record(&value).unwrap();
//! assert_eq!(bytes.len(), 17);
//! assert_eq!(decode_record::<Calibration>(&bytes).unwrap(), value);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod macros;
mod primitives;
mod reader;
mod writer;

pub use error::{CodecError, CodecResult};
pub use reader::RecordReader;
pub use writer::RecordWriter;

/// A plain, fixed-size record that can be stored in a medium.
///
/// Implementors declare their payload size up front and encode every field
/// with a fixed width, so any value round-trips through exactly
/// [`Record::SIZE`] bytes. Every bit pattern of the payload must decode to
/// some value.
///
/// The `Copy` bound keeps owning indirections (`String`, `Vec`, `Box`) out of
/// records at compile time. Use the [`record!`] macro to implement this trait
/// for a struct of records.
pub trait Record: Copy {
    /// Number of payload bytes.
    const SIZE: usize;

    /// Appends the payload of `self` to `writer`.
    fn encode(&self, writer: &mut RecordWriter);

    /// Reads a value back from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is shorter than the fields require.
    fn decode(reader: &mut RecordReader<'_>) -> CodecResult<Self>;

    /// Returns the value whose payload is all zero bytes.
    fn zeroed() -> Self;
}

/// Encodes a record to exactly [`Record::SIZE`] bytes.
///
/// # Errors
///
/// Returns [`CodecError::SizeMismatch`] if the implementation wrote a
/// different number of bytes than it declares.
pub fn encode_record<T: Record>(value: &T) -> CodecResult<Vec<u8>> {
    let mut writer = RecordWriter::with_capacity(T::SIZE);
    value.encode(&mut writer);
    if writer.len() != T::SIZE {
        return Err(CodecError::size_mismatch::<T>(T::SIZE, writer.len()));
    }
    Ok(writer.into_bytes())
}

/// Decodes a record from exactly [`Record::SIZE`] bytes.
///
/// # Errors
///
/// Returns [`CodecError::SizeMismatch`] if `bytes` has the wrong length or
/// the implementation consumed a different number of bytes than it declares.
pub fn decode_record<T: Record>(bytes: &[u8]) -> CodecResult<T> {
    if bytes.len() != T::SIZE {
        return Err(CodecError::size_mismatch::<T>(T::SIZE, bytes.len()));
    }
    let mut reader = RecordReader::new(bytes);
    let value = T::decode(&mut reader)?;
    if !reader.is_empty() {
        return Err(CodecError::size_mismatch::<T>(T::SIZE, reader.position()));
    }
    Ok(value)
}
