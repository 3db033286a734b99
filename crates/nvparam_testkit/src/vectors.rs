//! On-media layout test vectors for nvparam.
//!
//! Each vector pins the exact bytes a record write leaves in the medium, so
//! an image written by one build can be read by any other.

use serde::{Deserialize, Serialize};

/// A layout vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Checksum algorithm name.
    pub checksum: String,
    /// Encoded payload (hex-encoded).
    pub payload_hex: String,
    /// Expected checksum byte.
    pub checksum_byte: u8,
}

impl LayoutVector {
    /// Payload followed by the checksum byte, as stored in the medium.
    pub fn stored_bytes(&self) -> Vec<u8> {
        let mut bytes = hex_decode(&self.payload_hex).expect("vector payload is valid hex");
        bytes.push(self.checksum_byte);
        bytes
    }
}

/// Layout vectors for the fixture records.
pub fn layout_vectors() -> Vec<LayoutVector> {
    vec![
        LayoutVector {
            id: "user_data_zero".into(),
            description: "UserData::zeroed(), 17 zero bytes".into(),
            checksum: "CRC-8/MAXIM-DOW".into(),
            payload_hex: "00".repeat(17),
            checksum_byte: 0x00,
        },
        LayoutVector {
            id: "user_data_sample".into(),
            description: "UserData { a: [1, 2, 3, 4], b: 42 }".into(),
            checksum: "CRC-8/MAXIM-DOW".into(),
            payload_hex: "010000000200000003000000040000002a".into(),
            checksum_byte: 0xCF,
        },
        LayoutVector {
            id: "user_data_sample_smbus".into(),
            description: "UserData { a: [1, 2, 3, 4], b: 42 } under CRC-8/SMBUS".into(),
            checksum: "CRC-8/SMBUS".into(),
            payload_hex: "010000000200000003000000040000002a".into(),
            checksum_byte: 0xF3,
        },
        LayoutVector {
            id: "limits_signed".into(),
            description: "Limits { min: -100, max: 100, mode: 3 }".into(),
            checksum: "CRC-8/MAXIM-DOW".into(),
            payload_hex: "9cff640003".into(),
            checksum_byte: 0xA4,
        },
        LayoutVector {
            id: "u16_scalar".into(),
            description: "0x1234u16".into(),
            checksum: "CRC-8/MAXIM-DOW".into(),
            payload_hex: "3412".into(),
            checksum_byte: 0x37,
        },
    ]
}

/// All layout vectors as pretty-printed JSON.
pub fn layout_vectors_json() -> String {
    serde_json::to_string_pretty(&layout_vectors()).expect("vectors serialize")
}

/// Encodes bytes as lowercase hex.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decodes lowercase or uppercase hex.
pub fn hex_decode(hex: &str) -> Result<Vec<u8>, String> {
    if hex.len() % 2 != 0 {
        return Err("hex string has odd length".into());
    }

    hex.as_bytes()
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let digits = std::str::from_utf8(pair)
                .map_err(|_| format!("invalid hex at {}: not ASCII", i * 2))?;
            u8::from_str_radix(digits, 16).map_err(|e| format!("invalid hex at {}: {}", i * 2, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let bytes = vec![0x00, 0x7f, 0xff, 0x2a];
        assert_eq!(hex_encode(&bytes), "007fff2a");
        assert_eq!(hex_decode("007FFF2a").unwrap(), bytes);
    }

    #[test]
    fn hex_decode_rejects_bad_input() {
        assert!(hex_decode("abc").is_err());
        assert!(hex_decode("zz").is_err());
        assert!(hex_decode("aéa").is_err());
        assert!(hex_decode("éé").is_err());
    }

    #[test]
    fn vectors_have_unique_ids() {
        let vectors = layout_vectors();
        let mut ids: Vec<_> = vectors.iter().map(|v| v.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), vectors.len());
    }

    #[test]
    fn vectors_json_round_trips() {
        let parsed: Vec<LayoutVector> = serde_json::from_str(&layout_vectors_json()).unwrap();
        assert_eq!(parsed.len(), layout_vectors().len());
        assert_eq!(parsed[1].stored_bytes().len(), 18);
    }
}
