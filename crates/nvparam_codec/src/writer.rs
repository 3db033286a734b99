//! Payload writer.

/// Accumulates the payload bytes of a record, field by field.
///
/// Fields are appended in the order they are written, with no padding
/// between them.
#[derive(Debug, Default)]
pub struct RecordWriter {
    buffer: Vec<u8>,
}

impl RecordWriter {
    /// Create a new writer with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Append raw bytes.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume this writer and return the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}
