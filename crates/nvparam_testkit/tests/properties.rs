//! Property tests for the record store.

use nvparam_core::{Medium, Record, RecordStore};
use nvparam_testkit::prelude::*;
use proptest::prelude::*;

const CAPACITY: u64 = 256;

proptest! {
    #[test]
    fn write_then_read_round_trips(
        value in user_data_strategy(),
        address in address_strategy(<RecordStore<UserData>>::SPAN, CAPACITY),
    ) {
        let mut medium = erased_medium(CAPACITY);
        let mut store = RecordStore::<UserData>::new(address);
        store.set_data(value);
        store.write(&mut medium).unwrap();

        let mut fresh = RecordStore::<UserData>::new(address);
        prop_assert!(fresh.read(&medium).is_ok());
        prop_assert_eq!(*fresh.data(), value);
    }

    #[test]
    fn single_bit_corruption_is_detected(
        value in user_data_strategy(),
        flip in bit_flip_strategy(UserData::SIZE),
    ) {
        let mut medium = erased_medium(CAPACITY);
        let mut store = RecordStore::<UserData>::new(0);
        store.set_data(value);
        store.write(&mut medium).unwrap();

        let address = flip.byte as u64;
        let byte = medium.read_byte(address).unwrap();
        medium.write_byte(address, byte ^ flip.mask()).unwrap();

        let err = store.read(&medium).unwrap_err();
        prop_assert!(err.is_checksum_mismatch());
    }

    #[test]
    fn discard_fails_once_and_restores_twice(value in limits_strategy()) {
        let mut medium = erased_medium(CAPACITY);
        let mut store = RecordStore::<Limits>::new(7);
        store.set_data(value);
        store.write(&mut medium).unwrap();
        let payload_before = medium.read_at(7, Limits::SIZE).unwrap();

        store.discard(&mut medium).unwrap();
        prop_assert!(store.read(&medium).is_err());
        prop_assert_eq!(medium.read_at(7, Limits::SIZE).unwrap(), payload_before);

        store.discard(&mut medium).unwrap();
        prop_assert!(store.read(&medium).is_ok());
        prop_assert_eq!(*store.data(), value);
    }

    #[test]
    fn clear_never_touches_the_medium(value in user_data_strategy()) {
        let mut medium = erased_medium(CAPACITY);
        let mut store = RecordStore::<UserData>::new(0);
        store.set_data(value);
        store.write(&mut medium).unwrap();
        let before = medium.data();

        store.clear();
        prop_assert_eq!(*store.data(), UserData::zeroed());
        prop_assert_eq!(medium.data(), before);

        store.read(&medium).unwrap();
        prop_assert_eq!(*store.data(), value);
    }

    #[test]
    fn failed_read_still_loads_payload(payload in payload_strategy(UserData::SIZE)) {
        let mut medium = erased_medium(CAPACITY);
        medium.write_at(0, &payload).unwrap();

        let mut store = RecordStore::<UserData>::new(0);
        let _ = store.read(&medium);
        prop_assert_eq!(nvparam_codec::encode_record(store.data()).unwrap(), payload);
    }
}
