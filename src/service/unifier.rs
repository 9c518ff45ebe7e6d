// SPDX-License-Identifier: MIT OR Apache-2.0

//! Array/scalar unification.
//!
//! Some properties hold either one value or one value per data element. Reads
//! always produce a list; writes either force a form or pick one from the
//! number of values given. The form is never recorded separately, it is the
//! run-time shape of the slot.

use crate::domain::{FromNative, NativeValue, PropertyKey, Result};
use crate::service::node::ConfigNode;

/// How a list property is currently stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoredForm {
    /// A bare value
    Single,
    /// An array, possibly of length one
    Many,
}

/// Decodes a slot as a list: an array element-wise, anything else as one item.
///
/// An array with any undecodable element is rejected as a whole.
pub fn decode_list<T, F>(value: &NativeValue, decode: F) -> Option<Vec<T>>
where
    F: Fn(&NativeValue) -> Option<T>,
{
    match value {
        NativeValue::Array(items) => items.iter().map(&decode).collect(),
        other => decode(other).map(|item| vec![item]),
    }
}

impl ConfigNode {
    /// Stores a bare value, replacing whatever form was stored.
    pub fn set_one<V: Into<NativeValue>>(&self, key: &PropertyKey, value: V) -> Result<()> {
        self.set_value(key, value)
    }

    /// Stores an array, even for a single value, replacing whatever form was
    /// stored.
    pub fn set_many<V>(&self, key: &PropertyKey, values: &[V]) -> Result<()>
    where
        V: Clone + Into<NativeValue>,
    {
        let items = values.iter().cloned().map(Into::into).collect();
        self.set_value(key, NativeValue::Array(items))
    }

    /// Stores values choosing the form from their count: none removes the
    /// slot, one stores a bare value, more store an array.
    pub fn set_values<V>(&self, key: &PropertyKey, values: &[V]) -> Result<()>
    where
        V: Clone + Into<NativeValue>,
    {
        match values {
            [] => {
                key.check_valid()?;
                self.remove(key);
                Ok(())
            }
            [single] => self.set_one(key, single.clone()),
            _ => self.set_many(key, values),
        }
    }

    /// Returns the property as a list; an absent slot yields `[literal]`
    /// unless a default provides one.
    pub fn get_as_list<T: FromNative>(&self, key: &PropertyKey, literal: T) -> Vec<T> {
        self.get_list_with(key, T::from_native, literal)
    }

    /// Returns the property as a list, decoding each item with `decode`.
    pub fn get_list_with<T, F>(&self, key: &PropertyKey, decode: F, literal: T) -> Vec<T>
    where
        F: Fn(&NativeValue) -> Option<T>,
    {
        self.get_with(key, |value| decode_list(value, &decode), vec![literal])
    }

    /// Returns the form of the local slot, or `None` when it is absent or null.
    pub fn stored_form(&self, key: &PropertyKey) -> Option<StoredForm> {
        match self.get_local(key)? {
            NativeValue::Null => None,
            NativeValue::Array(_) => Some(StoredForm::Many),
            _ => Some(StoredForm::Single),
        }
    }
}
