//! Edge cases: empty inputs, long inputs, capacity boundaries.

use crate::*;
use cubby_store::{Entry, Error};

const LONG_KEY: &str = "Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1Key1";
const LONG_VALUE: &str = "value1value1value1value1value1value1value1value1value1value1value1value1value1value1value1value1value1value1value1value1";

#[test]
fn test_empty_key_is_rejected_everywhere() {
    let store = create_store();

    assert!(matches!(
        store.create("", "Value1").unwrap_err(),
        Error::InvalidKey(_)
    ));
    assert!(matches!(
        store.update("", "Value1").unwrap_err(),
        Error::InvalidKey(_)
    ));
    assert!(matches!(
        store.delete("").unwrap_err(),
        Error::InvalidKey(_)
    ));
    assert!(store.is_empty());
}

#[test]
fn test_empty_key_and_value_is_rejected() {
    let store = create_store();
    let err = store.create("", "").unwrap_err();
    assert!(matches!(err, Error::InvalidKey(_)));
}

#[test]
fn test_empty_value_create_and_update() {
    let store = create_store();

    let created = store.create("Key1", "").unwrap();
    assert_eq!(created.value, "");

    store.update("Key1", "Value1").unwrap();
    let updated = store.update("Key1", "").unwrap();
    assert_eq!(updated.value, "");
    assert_eq!(store.get("Key1").unwrap().value, "");
}

#[test]
fn test_long_key_and_value_roundtrip() {
    let store = create_store();

    let entry = store.create(LONG_KEY, LONG_VALUE).unwrap();
    assert_eq!(entry, Entry::new(LONG_KEY, LONG_VALUE));

    let fetched = store.get(LONG_KEY).unwrap();
    assert_eq!(fetched.main_key, LONG_KEY);
    assert_eq!(fetched.value, LONG_VALUE);
}

#[test]
fn test_long_key_short_value() {
    let store = create_store();
    store.create(LONG_KEY, "Value1").unwrap();
    assert_eq!(store.get(LONG_KEY).unwrap().value, "Value1");
}

#[test]
fn test_short_key_long_value() {
    let store = create_store();
    store.create("Key1", LONG_VALUE).unwrap();
    assert_eq!(store.get("Key1").unwrap().value, LONG_VALUE);
}

#[test]
fn test_eleventh_create_is_rejected() {
    let store = create_store();

    for i in 0..10 {
        store
            .create(&format!("Key{}", i), &format!("Value{}", i))
            .unwrap();
    }

    let err = store.create("nonexistentKey", "Value1").unwrap_err();
    assert!(err.is_quota_exceeded(), "Quota is 10, the 11th must fail");
    assert_eq!(store.len(), 10);
}

#[test]
fn test_update_and_delete_work_at_capacity() {
    let store = create_store();
    for i in 0..10 {
        store
            .create(&format!("Key{}", i), &format!("Value{}", i))
            .unwrap();
    }

    // Neither operation interacts with the quota.
    store.update("Key3", "UpdatedValue").unwrap();
    assert_eq!(store.get("Key3").unwrap().value, "UpdatedValue");

    store.delete("Key7").unwrap();
    assert_eq!(store.len(), 9);

    // The freed slot can be filled again.
    store.create("Key7", "Value7").unwrap();
    assert_eq!(store.len(), 10);
}

#[test]
fn test_unicode_keys_and_values() {
    let store = create_store();
    store.create("clé", "välue ✓").unwrap();
    assert_eq!(store.get("clé").unwrap().value, "välue ✓");
}
