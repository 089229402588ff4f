//! Property tests for the store contract.

use crate::*;
use proptest::prelude::*;

proptest! {
    /// Any non-empty key with any value round-trips through create/get.
    #[test]
    fn prop_create_get_roundtrip(key in ".{1,64}", value in ".{0,128}") {
        let store = create_store();

        let created = store.create(&key, &value).unwrap();
        prop_assert_eq!(&created.main_key, &key);
        prop_assert_eq!(&created.value, &value);

        let fetched = store.get(&key).unwrap();
        prop_assert_eq!(fetched.main_key, key);
        prop_assert_eq!(fetched.value, value);
    }

    /// A second create with the same key always conflicts and never
    /// clobbers the stored value.
    #[test]
    fn prop_duplicate_create_conflicts(key in ".{1,64}", v1 in ".{0,32}", v2 in ".{0,32}") {
        let store = create_store();
        store.create(&key, &v1).unwrap();

        let err = store.create(&key, &v2).unwrap_err();
        prop_assert!(err.is_conflict());
        prop_assert_eq!(store.get(&key).unwrap().value, v1);
        prop_assert_eq!(store.len(), 1);
    }

    /// Update replaces the value and keeps the count at one.
    #[test]
    fn prop_update_replaces(key in ".{1,64}", v1 in ".{0,32}", v2 in ".{0,32}") {
        let store = create_store();
        store.create(&key, &v1).unwrap();
        store.update(&key, &v2).unwrap();

        prop_assert_eq!(store.get(&key).unwrap().value, v2);
        prop_assert_eq!(store.len(), 1);
    }

    /// Delete of the only entry always empties the store.
    #[test]
    fn prop_delete_empties(key in ".{1,64}", value in ".{0,32}") {
        let store = create_store();
        store.create(&key, &value).unwrap();

        let removed = store.delete(&key).unwrap();
        prop_assert_eq!(removed.value, value);
        prop_assert!(store.is_empty());
    }
}
