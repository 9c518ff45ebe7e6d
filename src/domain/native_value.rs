// SPDX-License-Identifier: MIT OR Apache-2.0

//! Values held by a native map.
//!
//! [`NativeValue`] models the JSON-like values a host configuration object can
//! hold, plus two opaque categories: handles to non-JSON resources (images,
//! canvases, gradients, patterns) and callback placeholders.

use crate::domain::native_object::NativeObject;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_CALLBACK_ID: AtomicU64 = AtomicU64::new(1);

/// The category of resource an [`ExternalHandle`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleKind {
    /// An image element
    Image,
    /// A canvas element
    Canvas,
    /// A canvas gradient
    Gradient,
    /// A canvas pattern
    Pattern,
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandleKind::Image => "image",
            HandleKind::Canvas => "canvas",
            HandleKind::Gradient => "gradient",
            HandleKind::Pattern => "pattern",
        };
        f.write_str(name)
    }
}

/// An opaque reference to a host resource that has no JSON representation.
///
/// Two handles are equal only if they are copies of the same allocation.
///
/// # Examples
///
/// ```
/// use chartcfg::domain::{ExternalHandle, HandleKind};
///
/// let image = ExternalHandle::new(HandleKind::Image);
/// assert_eq!(image.kind(), HandleKind::Image);
/// assert_ne!(image, ExternalHandle::new(HandleKind::Image));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExternalHandle {
    kind: HandleKind,
    id: u64,
}

impl ExternalHandle {
    /// Allocates a new handle of the given kind.
    pub fn new(kind: HandleKind) -> Self {
        ExternalHandle {
            kind,
            id: NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Returns the resource kind.
    pub fn kind(&self) -> HandleKind {
        self.kind
    }

    /// Returns the allocation id.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for ExternalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}#{}>", self.kind, self.id)
    }
}

/// Placeholder stored where the host expects a scriptable callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackMarker {
    id: u64,
}

impl CallbackMarker {
    /// Allocates a new marker.
    pub fn new() -> Self {
        CallbackMarker {
            id: NEXT_CALLBACK_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Returns the allocation id.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Default for CallbackMarker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CallbackMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<callback#{}>", self.id)
    }
}

/// The run-time type of a slot, as reported by a native map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// The slot does not exist
    Undefined,
    /// An explicit null
    Null,
    /// A boolean
    Boolean,
    /// A number
    Number,
    /// A string
    String,
    /// An array
    Array,
    /// A nested map
    Object,
    /// A callback placeholder
    Function,
    /// An opaque host resource
    External(HandleKind),
}

/// A value stored in a native map.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    /// An explicit null
    Null,
    /// A boolean
    Boolean(bool),
    /// A number; the host has a single numeric type
    Number(f64),
    /// A string
    String(String),
    /// An ordered list of values
    Array(Vec<NativeValue>),
    /// A nested map, shared by reference
    Object(NativeObject),
    /// An opaque host resource
    External(ExternalHandle),
    /// A callback placeholder
    Callback(CallbackMarker),
}

impl NativeValue {
    /// Returns the run-time type of this value.
    pub fn object_type(&self) -> ObjectType {
        match self {
            NativeValue::Null => ObjectType::Null,
            NativeValue::Boolean(_) => ObjectType::Boolean,
            NativeValue::Number(_) => ObjectType::Number,
            NativeValue::String(_) => ObjectType::String,
            NativeValue::Array(_) => ObjectType::Array,
            NativeValue::Object(_) => ObjectType::Object,
            NativeValue::External(handle) => ObjectType::External(handle.kind()),
            NativeValue::Callback(_) => ObjectType::Function,
        }
    }

    /// Returns the nested object, if this value is one.
    pub fn as_object(&self) -> Option<&NativeObject> {
        match self {
            NativeValue::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns `true` for booleans, numbers and strings.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            NativeValue::Boolean(_) | NativeValue::Number(_) | NativeValue::String(_)
        )
    }
}

/// Exact-shape decoding of a native value into a Rust type.
///
/// Decoding never panics: a value of any other shape yields `None`, which the
/// accessors treat as absence.
///
/// # Examples
///
/// ```
/// use chartcfg::domain::{FromNative, NativeValue};
///
/// assert_eq!(f64::from_native(&NativeValue::Number(2.5)), Some(2.5));
/// assert_eq!(f64::from_native(&NativeValue::String("2.5".into())), None);
/// ```
pub trait FromNative: Sized {
    /// Decodes `value`, or returns `None` if it has a different shape.
    fn from_native(value: &NativeValue) -> Option<Self>;
}

impl FromNative for NativeValue {
    fn from_native(value: &NativeValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromNative for bool {
    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromNative for f64 {
    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromNative for i32 {
    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::Number(n) if (i32::MIN as f64..=i32::MAX as f64).contains(n) => {
                Some(n.trunc() as i32)
            }
            _ => None,
        }
    }
}

impl FromNative for u32 {
    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::Number(n) if (0.0..=u32::MAX as f64).contains(n) => Some(n.trunc() as u32),
            _ => None,
        }
    }
}

impl FromNative for String {
    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromNative for NativeObject {
    fn from_native(value: &NativeValue) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl FromNative for ExternalHandle {
    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::External(handle) => Some(*handle),
            _ => None,
        }
    }
}

impl FromNative for CallbackMarker {
    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::Callback(marker) => Some(*marker),
            _ => None,
        }
    }
}

impl<T: FromNative> FromNative for Vec<T> {
    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::Array(items) => items.iter().map(T::from_native).collect(),
            _ => None,
        }
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Boolean(value)
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Number(value)
    }
}

impl From<i32> for NativeValue {
    fn from(value: i32) -> Self {
        NativeValue::Number(f64::from(value))
    }
}

impl From<u32> for NativeValue {
    fn from(value: u32) -> Self {
        NativeValue::Number(f64::from(value))
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::String(value.to_string())
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        NativeValue::String(value)
    }
}

impl From<NativeObject> for NativeValue {
    fn from(value: NativeObject) -> Self {
        NativeValue::Object(value)
    }
}

impl From<ExternalHandle> for NativeValue {
    fn from(value: ExternalHandle) -> Self {
        NativeValue::External(value)
    }
}

impl From<CallbackMarker> for NativeValue {
    fn from(value: CallbackMarker) -> Self {
        NativeValue::Callback(value)
    }
}

impl<T: Into<NativeValue>> From<Vec<T>> for NativeValue {
    fn from(values: Vec<T>) -> Self {
        NativeValue::Array(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type() {
        assert_eq!(NativeValue::Null.object_type(), ObjectType::Null);
        assert_eq!(NativeValue::from(true).object_type(), ObjectType::Boolean);
        assert_eq!(NativeValue::from(1).object_type(), ObjectType::Number);
        assert_eq!(NativeValue::from("a").object_type(), ObjectType::String);
        assert_eq!(NativeValue::from(vec![1, 2]).object_type(), ObjectType::Array);
        assert_eq!(
            NativeValue::from(NativeObject::new()).object_type(),
            ObjectType::Object
        );
        assert_eq!(
            NativeValue::from(CallbackMarker::new()).object_type(),
            ObjectType::Function
        );
        assert_eq!(
            NativeValue::from(ExternalHandle::new(HandleKind::Canvas)).object_type(),
            ObjectType::External(HandleKind::Canvas)
        );
    }

    #[test]
    fn test_decode_exact_shapes() {
        assert_eq!(bool::from_native(&NativeValue::Boolean(false)), Some(false));
        assert_eq!(bool::from_native(&NativeValue::Number(0.0)), None);
        assert_eq!(String::from_native(&NativeValue::from("x")), Some("x".to_string()));
        assert_eq!(String::from_native(&NativeValue::Null), None);
    }

    #[test]
    fn test_decode_integers() {
        assert_eq!(i32::from_native(&NativeValue::Number(5.9)), Some(5));
        assert_eq!(i32::from_native(&NativeValue::Number(f64::NAN)), None);
        assert_eq!(u32::from_native(&NativeValue::Number(-1.0)), None);
        assert_eq!(u32::from_native(&NativeValue::Number(7.0)), Some(7));
    }

    #[test]
    fn test_decode_integers_out_of_range() {
        assert_eq!(i32::from_native(&NativeValue::Number(1e12)), None);
        assert_eq!(i32::from_native(&NativeValue::Number(-1e12)), None);
        assert_eq!(u32::from_native(&NativeValue::Number(1e12)), None);
        assert_eq!(i32::from_native(&NativeValue::Number(f64::INFINITY)), None);
        assert_eq!(
            i32::from_native(&NativeValue::Number(i32::MAX as f64)),
            Some(i32::MAX)
        );
    }

    #[test]
    fn test_decode_vec() {
        let value = NativeValue::from(vec![1, 2, 3]);
        assert_eq!(Vec::<i32>::from_native(&value), Some(vec![1, 2, 3]));

        let mixed = NativeValue::Array(vec![NativeValue::from(1), NativeValue::from("a")]);
        assert_eq!(Vec::<i32>::from_native(&mixed), None);
    }

    #[test]
    fn test_handles_are_unique() {
        let a = ExternalHandle::new(HandleKind::Gradient);
        let b = ExternalHandle::new(HandleKind::Gradient);
        assert_ne!(a, b);
        assert_eq!(a, a);
        assert!(a.to_string().starts_with("<gradient#"));
    }

    #[test]
    fn test_callback_markers_are_unique() {
        let a = CallbackMarker::new();
        let b = CallbackMarker::default();
        assert_ne!(a, b);
        assert!(a.to_string().starts_with("<callback#"));
    }

    #[test]
    fn test_is_scalar() {
        assert!(NativeValue::from(1).is_scalar());
        assert!(NativeValue::from("a").is_scalar());
        assert!(!NativeValue::Null.is_scalar());
        assert!(!NativeValue::from(vec![1]).is_scalar());
    }
}
