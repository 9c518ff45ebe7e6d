// SPDX-License-Identifier: MIT OR Apache-2.0

//! Border radius: one number for every corner, a per-corner object, or a
//! callback.

use crate::domain::{
    CallbackMarker, ConfigError, NativeObject, NativeValue, PropertyEnum, PropertyKey, Result,
};
use crate::service::{ConfigNode, Polymorphic, Shape};

crate::property_keys! {
    /// Slot names of a per-corner radius object.
    pub mod corner_keys {
        /// Top-left corner
        TOP_LEFT => "topLeft",
        /// Top-right corner
        TOP_RIGHT => "topRight",
        /// Bottom-left corner
        BOTTOM_LEFT => "bottomLeft",
        /// Bottom-right corner
        BOTTOM_RIGHT => "bottomRight",
    }
}

/// One corner of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left
    TopLeft,
    /// Top-right
    TopRight,
    /// Bottom-left
    BottomLeft,
    /// Bottom-right
    BottomRight,
}

impl PropertyEnum for Corner {
    fn value(&self) -> &'static str {
        match self {
            Corner::TopLeft => "topLeft",
            Corner::TopRight => "topRight",
            Corner::BottomLeft => "bottomLeft",
            Corner::BottomRight => "bottomRight",
        }
    }

    fn values() -> &'static [Self] {
        &[
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomLeft,
            Corner::BottomRight,
        ]
    }
}

impl Corner {
    /// Returns the slot name of this corner.
    pub const fn key(&self) -> PropertyKey {
        match self {
            Corner::TopLeft => corner_keys::TOP_LEFT,
            Corner::TopRight => corner_keys::TOP_RIGHT,
            Corner::BottomLeft => corner_keys::BOTTOM_LEFT,
            Corner::BottomRight => corner_keys::BOTTOM_RIGHT,
        }
    }
}

/// Radii of the four corners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Corners {
    /// Top-left radius
    pub top_left: f64,
    /// Top-right radius
    pub top_right: f64,
    /// Bottom-left radius
    pub bottom_left: f64,
    /// Bottom-right radius
    pub bottom_right: f64,
}

impl Corners {
    /// Creates corners that all share `radius`.
    pub fn uniform(radius: f64) -> Self {
        Corners {
            top_left: radius,
            top_right: radius,
            bottom_left: radius,
            bottom_right: radius,
        }
    }

    /// Returns the radius of one corner.
    pub fn get(&self, corner: Corner) -> f64 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// Returns the mean of the four radii.
    pub fn average(&self) -> f64 {
        (self.top_left + self.top_right + self.bottom_left + self.bottom_right) / 4.0
    }

    /// Returns `true` if all four radii are equal.
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_left == self.bottom_left
            && self.top_left == self.bottom_right
    }

    /// Reads corners from an object. Missing corners are zero; a corner that
    /// is not a number makes the whole object unreadable.
    pub fn from_object(object: &NativeObject) -> Option<Self> {
        let read = |corner: Corner| match object.get(corner.value()) {
            None => Some(0.0),
            Some(NativeValue::Number(n)) => Some(n),
            Some(_) => None,
        };
        Some(Corners {
            top_left: read(Corner::TopLeft)?,
            top_right: read(Corner::TopRight)?,
            bottom_left: read(Corner::BottomLeft)?,
            bottom_right: read(Corner::BottomRight)?,
        })
    }

    /// Writes the corners into a fresh object.
    pub fn to_object(&self) -> NativeObject {
        NativeObject::from_entries(
            Corner::values()
                .iter()
                .map(|corner| (corner.value(), self.get(*corner))),
        )
    }

    fn check_non_negative(&self, key: &PropertyKey) -> Result<()> {
        for corner in Corner::values() {
            let radius = self.get(*corner);
            if !radius.is_finite() || radius < 0.0 {
                return Err(ConfigError::negative(
                    format!("{}.{}", key, corner.value()),
                    radius,
                ));
            }
        }
        Ok(())
    }
}

/// A decoded border radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderRadius {
    /// The same radius on every corner
    Uniform(f64),
    /// One radius per corner
    Corners(Corners),
    /// Computed by a host callback
    Callback(CallbackMarker),
}

impl BorderRadius {
    /// Returns the scalar view: the uniform radius, or the average of the
    /// corners. A callback has no scalar view.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            BorderRadius::Uniform(radius) => Some(*radius),
            BorderRadius::Corners(corners) => Some(corners.average()),
            BorderRadius::Callback(_) => None,
        }
    }

    /// Returns the per-corner view, expanding a uniform radius.
    pub fn corners(&self) -> Option<Corners> {
        match self {
            BorderRadius::Uniform(radius) => Some(Corners::uniform(*radius)),
            BorderRadius::Corners(corners) => Some(*corners),
            BorderRadius::Callback(_) => None,
        }
    }
}

impl Polymorphic for BorderRadius {
    const SHAPES: &'static [Shape] = &[Shape::Structured, Shape::Callback, Shape::Number];

    fn decode_shape(shape: Shape, value: &NativeValue) -> Option<Self> {
        match (shape, value) {
            (Shape::Structured, NativeValue::Object(object)) => {
                Corners::from_object(object).map(BorderRadius::Corners)
            }
            (Shape::Callback, NativeValue::Callback(marker)) => {
                Some(BorderRadius::Callback(*marker))
            }
            (Shape::Number, NativeValue::Number(n)) if n.is_finite() => {
                Some(BorderRadius::Uniform(*n))
            }
            _ => None,
        }
    }

    fn encode(&self) -> NativeValue {
        match self {
            BorderRadius::Uniform(radius) => NativeValue::Number(*radius),
            BorderRadius::Corners(corners) => NativeValue::Object(corners.to_object()),
            BorderRadius::Callback(marker) => NativeValue::Callback(*marker),
        }
    }
}

/// Accessors for one border radius property.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::PropertyKey;
/// use chartcfg::resolvers::{BorderRadiusResolver, Corners};
/// use chartcfg::service::{ConfigNode, DefaultProviderChain};
/// use std::rc::Rc;
///
/// const RADIUS: BorderRadiusResolver =
///     BorderRadiusResolver::new(PropertyKey::new("BORDER_RADIUS", "borderRadius"), 0.0);
///
/// let node = ConfigNode::new(Rc::new(DefaultProviderChain::empty()));
/// RADIUS.set(&node, 6.0).unwrap();
/// assert_eq!(RADIUS.get_as_corners(&node), Some(Corners::uniform(6.0)));
/// assert!(RADIUS.is_as_number(&node));
/// ```
#[derive(Clone, Debug)]
pub struct BorderRadiusResolver {
    key: PropertyKey,
    literal: f64,
}

impl BorderRadiusResolver {
    /// Creates the accessors for `key`, with `literal` as the built-in default.
    pub const fn new(key: PropertyKey, literal: f64) -> Self {
        BorderRadiusResolver { key, literal }
    }

    /// Returns the property key.
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    /// Returns the effective value.
    pub fn get(&self, node: &ConfigNode) -> BorderRadius {
        node.get_polymorphic(&self.key, BorderRadius::Uniform(self.literal))
    }

    /// Returns the radius as a single number; a callback reads as the
    /// built-in default.
    pub fn get_border_radius(&self, node: &ConfigNode) -> f64 {
        self.get(node).scalar().unwrap_or(self.literal)
    }

    /// Returns the radius per corner. A number is expanded without touching
    /// the stored value; a callback yields `None`.
    pub fn get_as_corners(&self, node: &ConfigNode) -> Option<Corners> {
        self.get(node).corners()
    }

    /// Returns the callback, if that is what is in effect.
    pub fn get_callback(&self, node: &ConfigNode) -> Option<CallbackMarker> {
        match self.get(node) {
            BorderRadius::Callback(marker) => Some(marker),
            _ => None,
        }
    }

    /// Sets the same radius on every corner.
    pub fn set(&self, node: &ConfigNode, radius: f64) -> Result<()> {
        node.set_non_negative(&self.key, radius)
    }

    /// Sets one radius per corner.
    pub fn set_corners(&self, node: &ConfigNode, corners: &Corners) -> Result<()> {
        corners.check_non_negative(&self.key)?;
        node.set_polymorphic(&self.key, &BorderRadius::Corners(*corners))
    }

    /// Sets a single corner, expanding a number or callback into the
    /// per-corner form first.
    pub fn set_corner(&self, node: &ConfigNode, corner: Corner, radius: f64) -> Result<()> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::negative(
                format!("{}.{}", self.key, corner.value()),
                radius,
            ));
        }
        let mut corners = self
            .get_as_corners(node)
            .unwrap_or_else(|| Corners::uniform(self.literal));
        match corner {
            Corner::TopLeft => corners.top_left = radius,
            Corner::TopRight => corners.top_right = radius,
            Corner::BottomLeft => corners.bottom_left = radius,
            Corner::BottomRight => corners.bottom_right = radius,
        }
        self.set_corners(node, &corners)
    }

    /// Sets a callback computing the radius.
    pub fn set_callback(&self, node: &ConfigNode, marker: CallbackMarker) -> Result<()> {
        node.set_value(&self.key, marker)
    }

    /// Removes the local value.
    pub fn clear(&self, node: &ConfigNode) {
        node.remove(&self.key);
    }

    fn shape(&self, node: &ConfigNode) -> Shape {
        node.shape_of::<BorderRadius>(&self.key)
            .unwrap_or(Shape::Number)
    }

    /// Returns `true` when the radius is one number.
    pub fn is_as_number(&self, node: &ConfigNode) -> bool {
        self.shape(node) == Shape::Number
    }

    /// Returns `true` when the radius is a per-corner object.
    pub fn is_as_corners(&self, node: &ConfigNode) -> bool {
        self.shape(node) == Shape::Structured
    }

    /// Returns `true` when the radius is computed by a callback.
    pub fn is_as_callback(&self, node: &ConfigNode) -> bool {
        self.shape(node) == Shape::Callback
    }
}
