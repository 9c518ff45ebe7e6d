// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory native map adapter.

use crate::domain::NativeValue;
use crate::ports::NativeMap;
use indexmap::IndexMap;

/// An insertion-ordered, in-memory [`NativeMap`].
///
/// This is the default store behind [`NativeObject::new`](crate::domain::NativeObject::new).
/// Slot order follows first insertion, like the host's objects; overwriting a
/// slot keeps its position and removing it shifts later slots down.
///
/// # Examples
///
/// ```rust
/// use chartcfg::adapters::MemoryMap;
/// use chartcfg::domain::NativeValue;
/// use chartcfg::ports::NativeMap;
///
/// let mut map = MemoryMap::new();
/// map.set("b", NativeValue::from(1));
/// map.set("a", NativeValue::from(2));
/// assert_eq!(map.keys(), vec!["b", "a"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryMap {
    entries: IndexMap<String, NativeValue>,
}

impl MemoryMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map pre-populated with values.
    pub fn with_values(values: impl IntoIterator<Item = (String, NativeValue)>) -> Self {
        MemoryMap {
            entries: values.into_iter().collect(),
        }
    }
}

impl NativeMap for MemoryMap {
    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<NativeValue> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: NativeValue) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<NativeValue> {
        self.entries.shift_remove(key)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ObjectType;

    #[test]
    fn test_set_get_remove() {
        let mut map = MemoryMap::new();
        assert!(!map.has("top"));

        map.set("top", NativeValue::from(5));
        assert!(map.has("top"));
        assert_eq!(map.get("top"), Some(NativeValue::from(5)));
        assert_eq!(map.type_of("top"), ObjectType::Number);

        assert_eq!(map.remove("top"), Some(NativeValue::from(5)));
        assert!(!map.has("top"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = MemoryMap::new();
        map.set("a", NativeValue::from(1));
        map.set("b", NativeValue::from(2));
        map.set("a", NativeValue::from("x"));
        assert_eq!(map.keys(), vec!["a", "b"]);
        assert_eq!(map.type_of("a"), ObjectType::String);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map = MemoryMap::with_values(vec![
            ("a".to_string(), NativeValue::from(1)),
            ("b".to_string(), NativeValue::from(2)),
            ("c".to_string(), NativeValue::from(3)),
        ]);
        map.remove("a");
        assert_eq!(map.keys(), vec!["b", "c"]);
    }
}
