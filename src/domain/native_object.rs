// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared handle to one native map.
//!
//! Host configuration objects have reference semantics: once a child map has
//! been installed into its parent, writes made through the child are visible
//! through the parent. [`NativeObject`] reproduces that with a reference-counted,
//! interior-mutable box around any [`NativeMap`].

use crate::adapters::MemoryMap;
use crate::domain::native_value::{NativeValue, ObjectType};
use crate::ports::NativeMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A cloneable, shared reference to a native map.
///
/// Cloning aliases the same map. Use [`deep_clone`](NativeObject::deep_clone)
/// for an independent copy.
///
/// # Examples
///
/// ```
/// use chartcfg::domain::{NativeObject, NativeValue};
///
/// let object = NativeObject::new();
/// let alias = object.clone();
/// alias.set("top", NativeValue::from(5));
///
/// assert_eq!(object.get("top"), Some(NativeValue::from(5)));
/// assert!(object.ptr_eq(&alias));
/// ```
#[derive(Clone)]
pub struct NativeObject(Rc<RefCell<Box<dyn NativeMap>>>);

impl NativeObject {
    /// Creates an empty object backed by an in-memory ordered map.
    pub fn new() -> Self {
        Self::wrap(MemoryMap::new())
    }

    /// Wraps an externally supplied map.
    pub fn wrap(map: impl NativeMap + 'static) -> Self {
        NativeObject(Rc::new(RefCell::new(Box::new(map))))
    }

    /// Builds an object from key/value pairs, preserving their order.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        V: Into<NativeValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let object = Self::new();
        for (key, value) in entries {
            object.set(key.as_ref(), value.into());
        }
        object
    }

    /// Returns `true` if the slot exists.
    pub fn has(&self, key: &str) -> bool {
        self.0.borrow().has(key)
    }

    /// Returns a copy of the slot's value.
    pub fn get(&self, key: &str) -> Option<NativeValue> {
        self.0.borrow().get(key)
    }

    /// Stores `value` under `key`.
    pub fn set(&self, key: &str, value: NativeValue) {
        self.0.borrow_mut().set(key, value);
    }

    /// Deletes the slot and returns its previous value.
    pub fn remove(&self, key: &str) -> Option<NativeValue> {
        self.0.borrow_mut().remove(key)
    }

    /// Returns the run-time type of the slot.
    pub fn type_of(&self, key: &str) -> ObjectType {
        self.0.borrow().type_of(key)
    }

    /// Returns the slot names in iteration order.
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys()
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Returns `true` if the map has no slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns every slot as a `(key, value)` pair, in iteration order.
    pub fn entries(&self) -> Vec<(String, NativeValue)> {
        let map = self.0.borrow();
        map.keys()
            .into_iter()
            .filter_map(|key| map.get(&key).map(|value| (key, value)))
            .collect()
    }

    /// Returns `true` if both handles refer to the same map.
    pub fn ptr_eq(&self, other: &NativeObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Copies this object and every nested object into fresh in-memory maps.
    pub fn deep_clone(&self) -> NativeObject {
        let copy = NativeObject::new();
        for (key, value) in self.entries() {
            copy.set(&key, deep_clone_value(value));
        }
        copy
    }

    /// Recursively merges `source` into this object.
    ///
    /// Nested objects present on both sides are merged; any other slot from
    /// `source` is copied when this object lacks it, or always when
    /// `overwrite` is set.
    pub fn deep_merge(&self, source: &NativeObject, overwrite: bool) {
        if self.ptr_eq(source) {
            return;
        }
        for (key, value) in source.entries() {
            match (self.get(&key), value) {
                (Some(NativeValue::Object(target)), NativeValue::Object(nested)) => {
                    target.deep_merge(&nested, overwrite);
                }
                (Some(_), value) if overwrite => self.set(&key, deep_clone_value(value)),
                (None, value) => self.set(&key, deep_clone_value(value)),
                _ => {}
            }
        }
    }
}

fn deep_clone_value(value: NativeValue) -> NativeValue {
    match value {
        NativeValue::Object(object) => NativeValue::Object(object.deep_clone()),
        NativeValue::Array(items) => {
            NativeValue::Array(items.into_iter().map(deep_clone_value).collect())
        }
        other => other,
    }
}

impl Default for NativeObject {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for NativeObject {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let keys = self.keys();
        keys.len() == other.len()
            && keys.iter().all(|key| match other.get(key) {
                Some(value) => self.get(key).as_ref() == Some(&value),
                None => false,
            })
    }
}

impl fmt::Debug for NativeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}
