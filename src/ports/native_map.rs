// SPDX-License-Identifier: MIT OR Apache-2.0

//! Native map trait definition.
//!
//! This module defines the `NativeMap` trait, the single point of contact with
//! the host rendering engine's live configuration object. Any string-keyed,
//! heterogeneous map can back a configuration tree by implementing it.

use crate::domain::{NativeValue, ObjectType};

/// A string-keyed map of [`NativeValue`]s.
///
/// Implementations are used from a single thread and are reached through a
/// shared [`NativeObject`](crate::domain::NativeObject) handle, so they do not
/// need to be `Send` or `Sync`.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::NativeValue;
/// use chartcfg::ports::NativeMap;
/// use std::collections::BTreeMap;
///
/// struct SortedMap(BTreeMap<String, NativeValue>);
///
/// impl NativeMap for SortedMap {
///     fn has(&self, key: &str) -> bool {
///         self.0.contains_key(key)
///     }
///
///     fn get(&self, key: &str) -> Option<NativeValue> {
///         self.0.get(key).cloned()
///     }
///
///     fn set(&mut self, key: &str, value: NativeValue) {
///         self.0.insert(key.to_string(), value);
///     }
///
///     fn remove(&mut self, key: &str) -> Option<NativeValue> {
///         self.0.remove(key)
///     }
///
///     fn keys(&self) -> Vec<String> {
///         self.0.keys().cloned().collect()
///     }
/// }
///
/// let mut map = SortedMap(BTreeMap::new());
/// map.set("b", NativeValue::from(1));
/// assert!(map.has("b"));
/// ```
pub trait NativeMap {
    /// Returns `true` if the slot exists, even when it holds null.
    fn has(&self, key: &str) -> bool;

    /// Returns a copy of the slot's value. Nested objects are returned as
    /// shared handles, not deep copies.
    fn get(&self, key: &str) -> Option<NativeValue>;

    /// Stores `value`, replacing whatever the slot held.
    fn set(&mut self, key: &str, value: NativeValue);

    /// Deletes the slot and returns its previous value.
    fn remove(&mut self, key: &str) -> Option<NativeValue>;

    /// Returns the slot names in the map's iteration order.
    fn keys(&self) -> Vec<String>;

    /// Returns the run-time type of the slot.
    fn type_of(&self, key: &str) -> ObjectType {
        self.get(key)
            .map(|value| value.object_type())
            .unwrap_or(ObjectType::Undefined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct TestMap(HashMap<String, NativeValue>);

    impl NativeMap for TestMap {
        fn has(&self, key: &str) -> bool {
            self.0.contains_key(key)
        }

        fn get(&self, key: &str) -> Option<NativeValue> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: NativeValue) {
            self.0.insert(key.to_string(), value);
        }

        fn remove(&mut self, key: &str) -> Option<NativeValue> {
            self.0.remove(key)
        }

        fn keys(&self) -> Vec<String> {
            self.0.keys().cloned().collect()
        }
    }

    #[test]
    fn test_default_type_of() {
        let mut map = TestMap(HashMap::new());
        assert_eq!(map.type_of("missing"), ObjectType::Undefined);

        map.set("flag", NativeValue::from(false));
        assert_eq!(map.type_of("flag"), ObjectType::Boolean);

        map.set("nothing", NativeValue::Null);
        assert!(map.has("nothing"));
        assert_eq!(map.type_of("nothing"), ObjectType::Null);
    }

    #[test]
    fn test_remove_returns_previous() {
        let mut map = TestMap(HashMap::new());
        map.set("a", NativeValue::from(1));
        assert_eq!(map.remove("a"), Some(NativeValue::from(1)));
        assert_eq!(map.remove("a"), None);
        assert!(map.keys().is_empty());
    }
}
