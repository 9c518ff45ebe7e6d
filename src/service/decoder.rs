// SPDX-License-Identifier: MIT OR Apache-2.0

//! Polymorphic value decoding.
//!
//! Some properties accept more than one shape: a color may be a string or a
//! gradient handle, a radius a number or a per-corner object. Nothing records
//! which shape is stored; it is detected from the value itself by testing
//! [`Shape`]s in a fixed, family-specific order and dispatching to the first
//! one that matches. Any value that matches no shape of the family decodes to
//! `None` and the accessor falls through to its defaults.

use crate::domain::{
    CallbackMarker, ExternalHandle, HandleKind, NativeObject, NativeValue, PropertyKey, Result,
};
use crate::service::node::ConfigNode;

/// A run-time shape a stored value can have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An array of values
    Array,
    /// A nested map with named sub-fields
    Structured,
    /// An image handle
    Image,
    /// A canvas handle
    Canvas,
    /// A gradient handle
    Gradient,
    /// A pattern handle
    Pattern,
    /// A callback placeholder
    Callback,
    /// A boolean, usually a "disabled" sentinel
    Boolean,
    /// A string, usually an enumeration member or a color
    String,
    /// A number
    Number,
}

/// The shape test order used when a family has no reason to deviate.
///
/// Arrays are tested before structured maps, handles before scalars.
pub const DEFAULT_SHAPE_ORDER: &[Shape] = &[
    Shape::Array,
    Shape::Structured,
    Shape::Image,
    Shape::Canvas,
    Shape::Gradient,
    Shape::Pattern,
    Shape::Callback,
    Shape::Boolean,
    Shape::String,
    Shape::Number,
];

impl Shape {
    /// Returns `true` if `value` has this shape.
    pub fn matches(&self, value: &NativeValue) -> bool {
        match (self, value) {
            (Shape::Array, NativeValue::Array(_)) => true,
            (Shape::Structured, NativeValue::Object(_)) => true,
            (Shape::Image, NativeValue::External(h)) => h.kind() == HandleKind::Image,
            (Shape::Canvas, NativeValue::External(h)) => h.kind() == HandleKind::Canvas,
            (Shape::Gradient, NativeValue::External(h)) => h.kind() == HandleKind::Gradient,
            (Shape::Pattern, NativeValue::External(h)) => h.kind() == HandleKind::Pattern,
            (Shape::Callback, NativeValue::Callback(_)) => true,
            (Shape::Boolean, NativeValue::Boolean(_)) => true,
            (Shape::String, NativeValue::String(_)) => true,
            (Shape::Number, NativeValue::Number(_)) => true,
            _ => false,
        }
    }

    /// Returns the first shape in `order` that `value` has.
    pub fn detect(order: &[Shape], value: &NativeValue) -> Option<Shape> {
        order.iter().copied().find(|shape| shape.matches(value))
    }
}

/// A property family whose values can take several shapes.
///
/// Implementors list the shapes they accept, in test order, and supply one
/// reader per shape plus the inverse encoding.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::NativeValue;
/// use chartcfg::service::{decode, Polymorphic, Shape};
///
/// #[derive(Debug, PartialEq)]
/// enum Width {
///     Fixed(f64),
///     Flex,
/// }
///
/// impl Polymorphic for Width {
///     const SHAPES: &'static [Shape] = &[Shape::String, Shape::Number];
///
///     fn decode_shape(shape: Shape, value: &NativeValue) -> Option<Self> {
///         match (shape, value) {
///             (Shape::Number, NativeValue::Number(n)) => Some(Width::Fixed(*n)),
///             (Shape::String, NativeValue::String(s)) if s == "flex" => Some(Width::Flex),
///             _ => None,
///         }
///     }
///
///     fn encode(&self) -> NativeValue {
///         match self {
///             Width::Fixed(n) => NativeValue::from(*n),
///             Width::Flex => NativeValue::from("flex"),
///         }
///     }
/// }
///
/// assert_eq!(decode::<Width>(&NativeValue::from(3)), Some(Width::Fixed(3.0)));
/// assert_eq!(decode::<Width>(&NativeValue::from("flex")), Some(Width::Flex));
/// assert_eq!(decode::<Width>(&NativeValue::from("wide")), None);
/// assert_eq!(decode::<Width>(&NativeValue::from(true)), None);
/// ```
pub trait Polymorphic: Sized {
    /// Accepted shapes, in the order they are tested.
    const SHAPES: &'static [Shape];

    /// Reads a value already known to have `shape`.
    ///
    /// Returning `None` makes the value count as absent.
    fn decode_shape(shape: Shape, value: &NativeValue) -> Option<Self>;

    /// Encodes this variant into its natural map representation.
    fn encode(&self) -> NativeValue;
}

/// Decodes `value` as the first matching shape of `P`.
///
/// Never panics; an unrecognized value yields `None`.
pub fn decode<P: Polymorphic>(value: &NativeValue) -> Option<P> {
    let shape = Shape::detect(P::SHAPES, value)?;
    P::decode_shape(shape, value)
}

/// A scalar stored in a native map.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// A boolean
    Boolean(bool),
    /// A number
    Number(f64),
    /// A string
    String(String),
}

/// The generic decoding of any stored value.
#[derive(Clone, Debug, PartialEq)]
pub enum PolymorphicValue {
    /// A single scalar
    Scalar(Scalar),
    /// An array; elements that are not decodable are dropped
    ArrayOf(Vec<PolymorphicValue>),
    /// A nested map
    Structured(NativeObject),
    /// A host resource handle
    External(ExternalHandle),
    /// A callback placeholder
    Callback(CallbackMarker),
}

impl PolymorphicValue {
    /// Decodes any value; only `null` has no variant.
    pub fn decode(value: &NativeValue) -> Option<Self> {
        decode::<Self>(value)
    }
}

impl Polymorphic for PolymorphicValue {
    const SHAPES: &'static [Shape] = DEFAULT_SHAPE_ORDER;

    fn decode_shape(shape: Shape, value: &NativeValue) -> Option<Self> {
        match (shape, value) {
            (Shape::Array, NativeValue::Array(items)) => Some(PolymorphicValue::ArrayOf(
                items.iter().filter_map(PolymorphicValue::decode).collect(),
            )),
            (Shape::Structured, NativeValue::Object(object)) => {
                Some(PolymorphicValue::Structured(object.clone()))
            }
            (
                Shape::Image | Shape::Canvas | Shape::Gradient | Shape::Pattern,
                NativeValue::External(handle),
            ) => Some(PolymorphicValue::External(*handle)),
            (Shape::Callback, NativeValue::Callback(marker)) => {
                Some(PolymorphicValue::Callback(*marker))
            }
            (Shape::Boolean, NativeValue::Boolean(b)) => {
                Some(PolymorphicValue::Scalar(Scalar::Boolean(*b)))
            }
            (Shape::String, NativeValue::String(s)) => {
                Some(PolymorphicValue::Scalar(Scalar::String(s.clone())))
            }
            (Shape::Number, NativeValue::Number(n)) => {
                Some(PolymorphicValue::Scalar(Scalar::Number(*n)))
            }
            _ => None,
        }
    }

    fn encode(&self) -> NativeValue {
        match self {
            PolymorphicValue::Scalar(Scalar::Boolean(b)) => NativeValue::Boolean(*b),
            PolymorphicValue::Scalar(Scalar::Number(n)) => NativeValue::Number(*n),
            PolymorphicValue::Scalar(Scalar::String(s)) => NativeValue::String(s.clone()),
            PolymorphicValue::ArrayOf(items) => {
                NativeValue::Array(items.iter().map(Polymorphic::encode).collect())
            }
            PolymorphicValue::Structured(object) => NativeValue::Object(object.clone()),
            PolymorphicValue::External(handle) => NativeValue::External(*handle),
            PolymorphicValue::Callback(marker) => NativeValue::Callback(*marker),
        }
    }
}

impl ConfigNode {
    /// Returns the value of a polymorphic property, falling back to the
    /// default chain and then to `literal`.
    pub fn get_polymorphic<P: Polymorphic>(&self, key: &PropertyKey, literal: P) -> P {
        self.get_with(key, decode::<P>, literal)
    }

    /// Returns the value of a polymorphic property from the node or the
    /// default chain, or `None` when nothing decodes.
    pub fn find_polymorphic<P: Polymorphic>(&self, key: &PropertyKey) -> Option<P> {
        self.find_with(key, decode::<P>)
    }

    /// Stores a polymorphic property in its natural representation.
    pub fn set_polymorphic<P: Polymorphic>(&self, key: &PropertyKey, value: &P) -> Result<()> {
        self.set_value(key, value.encode())
    }

    /// Returns the shape of the effective value of `key` as seen by family `P`.
    ///
    /// The local slot is used when it decodes, otherwise the first decodable
    /// default.
    pub fn shape_of<P: Polymorphic>(&self, key: &PropertyKey) -> Option<Shape> {
        self.find_with(key, |value| {
            decode::<P>(value)?;
            Shape::detect(P::SHAPES, value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::DefaultProviderChain;
    use std::rc::Rc;

    const VALUE: PropertyKey = PropertyKey::new("VALUE", "value");

    #[test]
    fn test_shape_detection_order() {
        let value = NativeValue::from(vec![1, 2]);
        assert_eq!(Shape::detect(DEFAULT_SHAPE_ORDER, &value), Some(Shape::Array));

        let handle = NativeValue::from(ExternalHandle::new(HandleKind::Pattern));
        assert_eq!(Shape::detect(DEFAULT_SHAPE_ORDER, &handle), Some(Shape::Pattern));
        assert_eq!(Shape::detect(&[Shape::Gradient], &handle), None);

        assert_eq!(Shape::detect(DEFAULT_SHAPE_ORDER, &NativeValue::Null), None);
    }

    #[test]
    fn test_generic_decode_every_variant() {
        assert_eq!(
            PolymorphicValue::decode(&NativeValue::from(false)),
            Some(PolymorphicValue::Scalar(Scalar::Boolean(false)))
        );
        assert_eq!(
            PolymorphicValue::decode(&NativeValue::from(2.5)),
            Some(PolymorphicValue::Scalar(Scalar::Number(2.5)))
        );
        assert_eq!(
            PolymorphicValue::decode(&NativeValue::from("red")),
            Some(PolymorphicValue::Scalar(Scalar::String("red".into())))
        );

        let marker = CallbackMarker::new();
        assert_eq!(
            PolymorphicValue::decode(&NativeValue::from(marker)),
            Some(PolymorphicValue::Callback(marker))
        );

        let object = NativeObject::from_entries([("a", 1)]);
        assert_eq!(
            PolymorphicValue::decode(&NativeValue::from(object.clone())),
            Some(PolymorphicValue::Structured(object))
        );
        assert_eq!(PolymorphicValue::decode(&NativeValue::Null), None);
    }

    #[test]
    fn test_generic_array_drops_nulls() {
        let value = NativeValue::Array(vec![NativeValue::from(1), NativeValue::Null]);
        assert_eq!(
            PolymorphicValue::decode(&value),
            Some(PolymorphicValue::ArrayOf(vec![PolymorphicValue::Scalar(
                Scalar::Number(1.0)
            )]))
        );
    }

    #[test]
    fn test_node_round_trip() {
        let node = ConfigNode::new(Rc::new(DefaultProviderChain::empty()));
        let handle = ExternalHandle::new(HandleKind::Image);
        let value = PolymorphicValue::External(handle);

        node.set_polymorphic(&VALUE, &value).unwrap();
        assert_eq!(node.find_polymorphic::<PolymorphicValue>(&VALUE), Some(value));
        assert_eq!(node.shape_of::<PolymorphicValue>(&VALUE), Some(Shape::Image));
    }

    #[test]
    fn test_node_literal_when_absent() {
        let node = ConfigNode::new(Rc::new(DefaultProviderChain::empty()));
        let literal = PolymorphicValue::Scalar(Scalar::Number(0.0));
        assert_eq!(node.get_polymorphic(&VALUE, literal.clone()), literal);
        assert_eq!(node.shape_of::<PolymorphicValue>(&VALUE), None);

        node.set_value(&VALUE, NativeValue::Null).unwrap();
        assert_eq!(node.get_polymorphic(&VALUE, literal.clone()), literal);
    }
}
