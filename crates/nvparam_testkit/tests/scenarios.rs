//! End-to-end record store scenarios over in-memory and file mediums.

use nvparam_core::{Checksum, Crc8, Crc8Smbus, Medium, ParamError, Record, RecordStore};
use nvparam_storage::MediumConfig;
use nvparam_testkit::prelude::*;

#[test]
fn sixteen_byte_record_at_zero() {
    let mut medium = erased_medium(64);
    let store = RecordStore::<[u32; 4]>::new(0);
    assert_eq!(store.record_span(), 17);

    store.write(&mut medium).unwrap();

    let data = medium.data();
    assert_eq!(&data[..16], &[0u8; 16]);
    assert_eq!(data[16], Crc8::checksum(&[0u8; 16]));
    assert!(data[17..].iter().all(|&b| b == 0xFF));

    let mut fresh = RecordStore::<[u32; 4]>::new(0);
    fresh.read(&medium).unwrap();
    assert_eq!(*fresh.data(), [0; 4]);

    fresh.discard(&mut medium).unwrap();
    assert!(fresh.read(&medium).unwrap_err().is_checksum_mismatch());
}

#[test]
fn adjacent_stores_do_not_interfere() {
    let mut medium = erased_medium(64);
    let mut first = RecordStore::<[u32; 4]>::new(0);
    let mut second = RecordStore::<[u32; 4]>::new(first.end_address().unwrap());
    assert_eq!(second.address(), 17);

    first.set_data([1, 2, 3, 4]);
    second.set_data([5, 6, 7, 8]);
    first.write(&mut medium).unwrap();
    second.write(&mut medium).unwrap();

    first.clear();
    second.clear();
    first.read(&medium).unwrap();
    second.read(&medium).unwrap();
    assert_eq!(*first.data(), [1, 2, 3, 4]);
    assert_eq!(*second.data(), [5, 6, 7, 8]);

    second.discard(&mut medium).unwrap();
    first.read(&medium).unwrap();
    assert!(second.read(&medium).is_err());

    first.set_data([9; 4]);
    first.write(&mut medium).unwrap();
    second.discard(&mut medium).unwrap();
    second.read(&medium).unwrap();
    assert_eq!(*second.data(), [5, 6, 7, 8]);
}

#[test]
fn user_data_layout_matches_vectors() {
    let mut medium = erased_medium(64);
    let mut store = RecordStore::<UserData>::new(0);
    assert_eq!(store.record_span(), 18);

    store.write(&mut medium).unwrap();
    let zero = &layout_vectors()[0];
    assert_eq!(medium.read_at(0, 18).unwrap(), zero.stored_bytes());

    store.set_data(sample_user_data());
    store.write(&mut medium).unwrap();
    let sample = &layout_vectors()[1];
    assert_eq!(medium.read_at(0, 18).unwrap(), sample.stored_bytes());
}

#[test]
fn every_vector_reproduces() {
    for vector in layout_vectors() {
        let mut medium = erased_medium(32);
        let stored = vector.stored_bytes();
        let payload = &stored[..stored.len() - 1];

        let expected = match vector.checksum.as_str() {
            "CRC-8/SMBUS" => Crc8Smbus::checksum(payload),
            _ => Crc8::checksum(payload),
        };
        assert_eq!(expected, vector.checksum_byte, "vector {}", vector.id);

        medium.write_at(3, &stored).unwrap();
        match vector.id.as_str() {
            "limits_signed" => {
                let mut store = RecordStore::<Limits>::new(3);
                store.read(&medium).unwrap();
                assert_eq!(
                    *store.data(),
                    Limits {
                        min: -100,
                        max: 100,
                        mode: 3
                    }
                );
            }
            "u16_scalar" => {
                let mut store = RecordStore::<u16>::new(3);
                store.read(&medium).unwrap();
                assert_eq!(*store.data(), 0x1234);
            }
            "user_data_sample_smbus" => {
                let mut store = RecordStore::<UserData, Crc8Smbus>::with_checksum(3);
                store.read(&medium).unwrap();
                assert_eq!(*store.data(), sample_user_data());
            }
            _ => {
                let mut store = RecordStore::<UserData>::new(3);
                store.read(&medium).unwrap();
            }
        }
    }
}

#[test]
fn typical_boot_sequence() {
    let mut medium = erased_medium(1024);
    let mut param = RecordStore::<UserData>::new(0);

    // First boot: nothing stored yet.
    if param.read(&medium).is_err() {
        param.clear();
        param.write(&mut medium).unwrap();
    }
    param.b = 42;
    param.write(&mut medium).unwrap();

    // Second boot.
    let mut param = RecordStore::<UserData>::new(0);
    param.read(&medium).unwrap();
    assert_eq!(param.b, 42);
}

#[test]
fn records_survive_reopening_the_image() {
    let mut image = TestImage::with_config(MediumConfig::new().capacity(128));
    let mut store = RecordStore::<UserData>::new(40);
    store.set_data(sample_user_data());
    store.write(&mut image.medium).unwrap();

    let image = image.reopen();
    let mut store = RecordStore::<UserData>::new(40);
    store.read(&image.medium).unwrap();
    assert_eq!(*store.data(), sample_user_data());
}

#[test]
fn discard_survives_reopening_the_image() {
    let mut image = TestImage::with_config(MediumConfig::new().capacity(128));
    let store = RecordStore::<Limits>::new(0);
    store.write(&mut image.medium).unwrap();
    store.discard(&mut image.medium).unwrap();

    let image = image.reopen();
    let mut store = RecordStore::<Limits>::new(0);
    assert!(store.read(&image.medium).is_err());
}

#[test]
fn store_past_capacity_reports_medium_error() {
    let mut medium = erased_medium(20);
    let mut store = RecordStore::<UserData>::new(4);

    assert!(matches!(store.write(&mut medium), Err(ParamError::Medium(_))));
    assert!(matches!(store.read(&medium), Err(ParamError::Medium(_))));
}

#[test]
fn span_matches_record_size() {
    assert_eq!(<RecordStore<u8>>::SPAN, u8::SIZE + 1);
    assert_eq!(<RecordStore<Limits>>::SPAN, Limits::SIZE + 1);
    assert_eq!(<RecordStore<[UserData; 3]>>::SPAN, 3 * 17 + 1);
}
