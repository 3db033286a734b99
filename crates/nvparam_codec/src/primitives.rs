//! `Record` implementations for numbers and arrays.

use crate::error::CodecResult;
use crate::reader::RecordReader;
use crate::writer::RecordWriter;
use crate::Record;

macro_rules! impl_le_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn encode(&self, writer: &mut RecordWriter) {
                    writer.put_bytes(&self.to_le_bytes());
                }

                fn decode(reader: &mut RecordReader<'_>) -> CodecResult<Self> {
                    let bytes = reader.take_array::<{ std::mem::size_of::<$ty>() }>()?;
                    Ok(<$ty>::from_le_bytes(bytes))
                }

                fn zeroed() -> Self {
                    <$ty>::from_le_bytes([0; std::mem::size_of::<$ty>()])
                }
            }
        )*
    };
}

impl_le_record!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl<T: Record, const N: usize> Record for [T; N] {
    const SIZE: usize = T::SIZE * N;

    fn encode(&self, writer: &mut RecordWriter) {
        for item in self {
            item.encode(writer);
        }
    }

    fn decode(reader: &mut RecordReader<'_>) -> CodecResult<Self> {
        let mut out = [T::zeroed(); N];
        for slot in &mut out {
            *slot = T::decode(reader)?;
        }
        Ok(out)
    }

    fn zeroed() -> Self {
        [T::zeroed(); N]
    }
}

#[cfg(test)]
mod tests {
    use crate::{decode_record, encode_record, Record};

    #[test]
    fn sizes_are_natural_widths() {
        assert_eq!(u8::SIZE, 1);
        assert_eq!(i16::SIZE, 2);
        assert_eq!(f32::SIZE, 4);
        assert_eq!(u64::SIZE, 8);
        assert_eq!(i128::SIZE, 16);
        assert_eq!(<[u32; 4]>::SIZE, 16);
        assert_eq!(<[[u16; 3]; 2]>::SIZE, 12);
        assert_eq!(<[u8; 0]>::SIZE, 0);
    }

    #[test]
    fn integers_are_little_endian() {
        assert_eq!(encode_record(&0x1234_5678u32).unwrap(), [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(encode_record(&-2i16).unwrap(), [0xFE, 0xFF]);
        assert_eq!(decode_record::<u16>(&[0x01, 0x02]).unwrap(), 0x0201);
    }

    #[test]
    fn arrays_are_elements_back_to_back() {
        let bytes = encode_record(&[1u16, 2, 3]).unwrap();
        assert_eq!(bytes, [1, 0, 2, 0, 3, 0]);
        assert_eq!(decode_record::<[u16; 3]>(&bytes).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn zeroed_encodes_to_zero_bytes() {
        assert_eq!(encode_record(&f64::zeroed()).unwrap(), [0; 8]);
        assert_eq!(encode_record(&<[[i32; 2]; 2]>::zeroed()).unwrap(), [0; 16]);
    }

    #[test]
    fn float_bit_patterns_survive() {
        let nan_bytes = [0x01, 0x00, 0xC0, 0x7F];
        let value = decode_record::<f32>(&nan_bytes).unwrap();
        assert!(value.is_nan());
        assert_eq!(encode_record(&value).unwrap(), nan_bytes);
    }
}
