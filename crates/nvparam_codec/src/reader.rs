//! Payload reader.

use crate::error::{CodecError, CodecResult};

/// Reads the payload bytes of a record back, field by field.
pub struct RecordReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RecordReader<'a> {
    /// Create a new reader over the given payload.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Take the next `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedEof`] if fewer than `len` bytes remain.
    pub fn take(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        let remaining = self.data.len() - self.pos;
        if len > remaining {
            return Err(CodecError::UnexpectedEof {
                needed: len,
                remaining,
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Take the next `N` bytes as an array.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedEof`] if fewer than `N` bytes remain.
    pub fn take_array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_takes_in_order() {
        let mut reader = RecordReader::new(&[1, 2, 3, 4, 5]);

        assert_eq!(reader.take(2).unwrap(), &[1, 2]);
        assert_eq!(reader.take_array::<2>().unwrap(), [3, 4]);
        assert_eq!(reader.position(), 4);
        assert!(!reader.is_empty());

        reader.take(1).unwrap();
        assert!(reader.is_empty());
    }

    #[test]
    fn reader_past_end_fails() {
        let mut reader = RecordReader::new(&[1, 2]);
        reader.take(1).unwrap();

        assert_eq!(
            reader.take(4),
            Err(CodecError::UnexpectedEof {
                needed: 4,
                remaining: 1
            })
        );
        assert_eq!(reader.position(), 1);
    }
}
