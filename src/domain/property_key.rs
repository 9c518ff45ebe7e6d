// SPDX-License-Identifier: MIT OR Apache-2.0

//! Symbolic property keys.
//!
//! A [`PropertyKey`] pairs a symbolic name with the canonical string used as the
//! slot name inside a native map. Keys carry no behavior; groups of keys for one
//! node type are declared with [`property_keys!`](crate::property_keys).

use crate::domain::errors::{ConfigError, Result};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable `(name, canonical string)` pair identifying one property.
///
/// Equality and hashing only consider the canonical string.
///
/// # Examples
///
/// ```
/// use chartcfg::domain::PropertyKey;
///
/// const BORDER_WIDTH: PropertyKey = PropertyKey::new("BORDER_WIDTH", "borderWidth");
///
/// assert_eq!(BORDER_WIDTH.value(), "borderWidth");
/// assert_eq!(BORDER_WIDTH.name(), "BORDER_WIDTH");
/// assert_eq!(BORDER_WIDTH, PropertyKey::dynamic("borderWidth").unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct PropertyKey {
    name: Cow<'static, str>,
    value: Cow<'static, str>,
}

impl PropertyKey {
    /// Creates a key from static strings; usable in `const` items.
    pub const fn new(name: &'static str, value: &'static str) -> Self {
        PropertyKey {
            name: Cow::Borrowed(name),
            value: Cow::Borrowed(value),
        }
    }

    /// Creates a key at run time, using the canonical string as its name too.
    ///
    /// Returns `ConfigError::InvalidKey` if `value` is empty.
    pub fn dynamic(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::InvalidKey { key: value });
        }
        Ok(PropertyKey {
            name: Cow::Owned(value.clone()),
            value: Cow::Owned(value),
        })
    }

    /// Returns the symbolic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical string used as the map key.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the canonical string can be used as a map key.
    pub fn is_valid(&self) -> bool {
        !self.value.is_empty()
    }

    /// Returns `ConfigError::InvalidKey` when the key is not valid.
    pub fn check_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ConfigError::InvalidKey {
                key: self.name.to_string(),
            })
        }
    }
}

impl PartialEq for PropertyKey {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PropertyKey {}

impl Hash for PropertyKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl AsRef<str> for PropertyKey {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A string-valued enumeration stored in a native map by its canonical value.
///
/// # Examples
///
/// ```
/// use chartcfg::domain::PropertyEnum;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Align { Start, End }
///
/// impl PropertyEnum for Align {
///     fn value(&self) -> &'static str {
///         match self {
///             Align::Start => "start",
///             Align::End => "end",
///         }
///     }
///
///     fn values() -> &'static [Self] {
///         &[Align::Start, Align::End]
///     }
/// }
///
/// assert_eq!(Align::from_value("end"), Some(Align::End));
/// assert_eq!(Align::from_value("middle"), None);
/// ```
pub trait PropertyEnum: Copy + Sized + 'static {
    /// The canonical string stored in the map.
    fn value(&self) -> &'static str;

    /// All members of the enumeration.
    fn values() -> &'static [Self];

    /// Looks a member up by canonical string.
    fn from_value(value: &str) -> Option<Self> {
        Self::values().iter().copied().find(|item| item.value() == value)
    }
}

/// Declares a group of property keys for one node type.
///
/// Expands to a module holding one `PropertyKey` constant per entry plus `ALL`,
/// a slice of every key in declaration order.
///
/// # Examples
///
/// ```
/// chartcfg::property_keys! {
///     /// Keys of a padding node.
///     pub mod padding_keys {
///         TOP => "top",
///         BOTTOM => "bottom",
///     }
/// }
///
/// assert_eq!(padding_keys::TOP.value(), "top");
/// assert_eq!(padding_keys::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! property_keys {
    (
        $(#[$meta:meta])*
        $vis:vis mod $group:ident {
            $( $(#[$kmeta:meta])* $name:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis mod $group {
            #[allow(unused_imports)]
            use $crate::domain::PropertyKey;

            $(
                $(#[$kmeta])*
                pub const $name: PropertyKey = PropertyKey::new(stringify!($name), $value);
            )+

            /// Every key of this group, in declaration order.
            pub const ALL: &[PropertyKey] = &[$($name),+];
        }
    };
}
