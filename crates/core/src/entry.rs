//! The stored record type.

use serde::{Deserialize, Serialize};

/// A single key/value record in the store.
///
/// The field names match the wire format of the HTTP surface, so an `Entry`
/// serializes directly as a response body:
///
/// ```json
/// {"main_key": "Key1", "value": "Value1"}
/// ```
///
/// Keys are unique across the store and are the sole identifier of a record.
/// Neither field has a declared maximum length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The key. Non-empty for any entry that exists in the store.
    pub main_key: String,
    /// The text payload associated with the key. May be empty.
    pub value: String,
}

impl Entry {
    /// Create a new entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubby_core::Entry;
    ///
    /// let entry = Entry::new("Key1", "Value1");
    /// assert_eq!(entry.main_key, "Key1");
    /// assert_eq!(entry.value, "Value1");
    /// ```
    pub fn new(main_key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            main_key: main_key.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Entry {
    /// Display an entry in the format: key=value
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.main_key, self.value)
    }
}
