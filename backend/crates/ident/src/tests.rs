//! Crate-level tests for Uid
//! Properties over arbitrary byte patterns, uniqueness and thread safety.

#[cfg(test)]
mod property_tests {
    use std::hash::{BuildHasher, RandomState};

    use proptest::prelude::*;

    use crate::error::UidError;
    use crate::uid::{UID_LEN, Uid};

    proptest! {
        #[test]
        fn equality_matches_bytes(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
            let (x, y) = (Uid::from_array(a), Uid::from_array(b));
            prop_assert_eq!(x == y, x.to_bytes() == y.to_bytes());
        }

        #[test]
        fn equal_uids_hash_equal(bytes in any::<[u8; 16]>()) {
            let x = Uid::from_array(bytes);
            let y = Uid::from_bytes(&bytes).unwrap();
            let state = RandomState::new();
            prop_assert_eq!(x, y);
            prop_assert_eq!(state.hash_one(x), state.hash_one(y));
            prop_assert_eq!(x.hash_code(), y.hash_code());
        }

        #[test]
        fn any_sixteen_bytes_round_trip(bytes in any::<[u8; 16]>()) {
            let uid = Uid::from_bytes(&bytes).unwrap();
            prop_assert_eq!(uid.to_bytes(), bytes);
            prop_assert_eq!(Uid::from_bytes(&uid.to_bytes()).unwrap(), uid);
        }

        #[test]
        fn wrong_length_is_malformed(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assume!(bytes.len() != UID_LEN);
            let err = Uid::from_bytes(&bytes).unwrap_err();
            prop_assert_eq!(err, UidError::MalformedInput { expected: UID_LEN, actual: bytes.len() });
        }

        #[test]
        fn text_form_round_trips(bytes in any::<[u8; 16]>()) {
            let uid = Uid::from_array(bytes);
            prop_assert_eq!(Uid::parse_str(&uid.to_string()).unwrap(), uid);
        }
    }
}

#[cfg(test)]
mod uniqueness_tests {
    use std::collections::HashSet;
    use std::thread;

    use crate::uid::Uid;

    #[test]
    fn test_ten_thousand_fresh_uids_are_distinct() {
        let seen: HashSet<[u8; 16]> = (0..10_000).map(|_| Uid::new().to_bytes()).collect();
        assert_eq!(seen.len(), 10_000);
    }

    #[test]
    fn test_concurrent_generation() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| (0..1_000).map(|_| Uid::new()).collect::<Vec<_>>()))
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for uid in handle.join().unwrap() {
                assert_eq!(uid.version_num(), 4);
                assert!(all.insert(uid), "duplicate UID {}", uid);
            }
        }
        assert_eq!(all.len(), 8_000);
    }

    #[test]
    fn test_shared_read_across_threads() {
        let uid = Uid::new();
        let expected = uid.to_bytes();
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(move || uid.to_bytes()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
