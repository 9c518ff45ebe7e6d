// SPDX-License-Identifier: MIT OR Apache-2.0

//! Point style: a named shape, `false` to draw nothing, an image, a canvas,
//! or a callback.

use crate::domain::{
    CallbackMarker, ConfigError, ExternalHandle, HandleKind, NativeValue, PropertyEnum,
    PropertyKey, Result,
};
use crate::service::{decode_enum, ConfigNode, Polymorphic, Shape};

/// Built-in point shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointStyle {
    /// `circle`
    Circle,
    /// `cross`
    Cross,
    /// `crossRot`
    CrossRot,
    /// `dash`
    Dash,
    /// `line`
    Line,
    /// `rect`
    Rect,
    /// `rectRounded`
    RectRounded,
    /// `rectRot`
    RectRot,
    /// `star`
    Star,
    /// `triangle`
    Triangle,
}

impl PropertyEnum for PointStyle {
    fn value(&self) -> &'static str {
        match self {
            PointStyle::Circle => "circle",
            PointStyle::Cross => "cross",
            PointStyle::CrossRot => "crossRot",
            PointStyle::Dash => "dash",
            PointStyle::Line => "line",
            PointStyle::Rect => "rect",
            PointStyle::RectRounded => "rectRounded",
            PointStyle::RectRot => "rectRot",
            PointStyle::Star => "star",
            PointStyle::Triangle => "triangle",
        }
    }

    fn values() -> &'static [Self] {
        &[
            PointStyle::Circle,
            PointStyle::Cross,
            PointStyle::CrossRot,
            PointStyle::Dash,
            PointStyle::Line,
            PointStyle::Rect,
            PointStyle::RectRounded,
            PointStyle::RectRot,
            PointStyle::Star,
            PointStyle::Triangle,
        ]
    }
}

/// A decoded point style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointStyleValue {
    /// A built-in shape
    Style(PointStyle),
    /// Explicitly no point, stored as `false`
    Disabled,
    /// An image handle
    Image(ExternalHandle),
    /// A canvas handle
    Canvas(ExternalHandle),
    /// Computed by a host callback
    Callback(CallbackMarker),
}

impl Polymorphic for PointStyleValue {
    const SHAPES: &'static [Shape] = &[
        Shape::Image,
        Shape::Canvas,
        Shape::Callback,
        Shape::Boolean,
        Shape::String,
    ];

    fn decode_shape(shape: Shape, value: &NativeValue) -> Option<Self> {
        match (shape, value) {
            (Shape::Image, NativeValue::External(handle)) => Some(PointStyleValue::Image(*handle)),
            (Shape::Canvas, NativeValue::External(handle)) => {
                Some(PointStyleValue::Canvas(*handle))
            }
            (Shape::Callback, NativeValue::Callback(marker)) => {
                Some(PointStyleValue::Callback(*marker))
            }
            // `true` has no meaning here and reads as absent
            (Shape::Boolean, NativeValue::Boolean(false)) => Some(PointStyleValue::Disabled),
            (Shape::String, value) => decode_enum::<PointStyle>(value).map(PointStyleValue::Style),
            _ => None,
        }
    }

    fn encode(&self) -> NativeValue {
        match self {
            PointStyleValue::Style(style) => NativeValue::from(style.value()),
            PointStyleValue::Disabled => NativeValue::Boolean(false),
            PointStyleValue::Image(handle) | PointStyleValue::Canvas(handle) => {
                NativeValue::External(*handle)
            }
            PointStyleValue::Callback(marker) => NativeValue::Callback(*marker),
        }
    }
}

/// Accessors for one point style property.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::PropertyKey;
/// use chartcfg::resolvers::{PointStyle, PointStyleResolver, PointStyleValue};
/// use chartcfg::service::{ConfigNode, DefaultProviderChain};
/// use std::rc::Rc;
///
/// const STYLE: PointStyleResolver =
///     PointStyleResolver::new(PropertyKey::new("POINT_STYLE", "pointStyle"), PointStyle::Circle);
///
/// let node = ConfigNode::new(Rc::new(DefaultProviderChain::empty()));
/// assert_eq!(STYLE.get(&node), PointStyleValue::Style(PointStyle::Circle));
///
/// STYLE.set_disabled(&node).unwrap();
/// assert!(STYLE.is_disabled(&node));
/// assert_eq!(STYLE.get_as_style(&node), PointStyle::Circle);
/// ```
#[derive(Clone, Debug)]
pub struct PointStyleResolver {
    key: PropertyKey,
    literal: PointStyle,
}

impl PointStyleResolver {
    /// Creates the accessors for `key`, with `literal` as the built-in default.
    pub const fn new(key: PropertyKey, literal: PointStyle) -> Self {
        PointStyleResolver { key, literal }
    }

    /// Returns the property key.
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    /// Returns the effective value.
    pub fn get(&self, node: &ConfigNode) -> PointStyleValue {
        node.get_polymorphic(&self.key, PointStyleValue::Style(self.literal))
    }

    /// Returns the style name. When another variant is in effect, the default
    /// style is returned.
    pub fn get_as_style(&self, node: &ConfigNode) -> PointStyle {
        match self.get(node) {
            PointStyleValue::Style(style) => style,
            _ => node.get_default_with(&self.key, decode_enum::<PointStyle>, self.literal),
        }
    }

    /// Returns the image, if that is what is in effect.
    pub fn get_as_image(&self, node: &ConfigNode) -> Option<ExternalHandle> {
        match self.get(node) {
            PointStyleValue::Image(handle) => Some(handle),
            _ => None,
        }
    }

    /// Returns the canvas, if that is what is in effect.
    pub fn get_as_canvas(&self, node: &ConfigNode) -> Option<ExternalHandle> {
        match self.get(node) {
            PointStyleValue::Canvas(handle) => Some(handle),
            _ => None,
        }
    }

    /// Sets a built-in shape.
    pub fn set_style(&self, node: &ConfigNode, style: PointStyle) -> Result<()> {
        node.set_enum(&self.key, style)
    }

    /// Disables drawing of points.
    pub fn set_disabled(&self, node: &ConfigNode) -> Result<()> {
        node.set_value(&self.key, false)
    }

    /// Sets an image; any other handle kind is rejected.
    pub fn set_image(&self, node: &ConfigNode, image: ExternalHandle) -> Result<()> {
        self.set_handle(node, HandleKind::Image, image)
    }

    /// Sets a canvas; any other handle kind is rejected.
    pub fn set_canvas(&self, node: &ConfigNode, canvas: ExternalHandle) -> Result<()> {
        self.set_handle(node, HandleKind::Canvas, canvas)
    }

    /// Sets a callback computing the style.
    pub fn set_callback(&self, node: &ConfigNode, marker: CallbackMarker) -> Result<()> {
        node.set_value(&self.key, marker)
    }

    /// Stores any variant.
    pub fn set(&self, node: &ConfigNode, value: PointStyleValue) -> Result<()> {
        match value {
            PointStyleValue::Image(handle) => self.set_image(node, handle),
            PointStyleValue::Canvas(handle) => self.set_canvas(node, handle),
            other => node.set_polymorphic(&self.key, &other),
        }
    }

    fn set_handle(&self, node: &ConfigNode, expected: HandleKind, handle: ExternalHandle) -> Result<()> {
        if handle.kind() != expected {
            return Err(ConfigError::wrong_handle(
                self.key.value(),
                expected,
                handle.kind(),
            ));
        }
        node.set_value(&self.key, handle)
    }

    /// Returns `true` when a built-in shape is in effect.
    pub fn is_as_style(&self, node: &ConfigNode) -> bool {
        matches!(self.get(node), PointStyleValue::Style(_))
    }

    /// Returns `true` when points are explicitly disabled.
    pub fn is_disabled(&self, node: &ConfigNode) -> bool {
        self.get(node) == PointStyleValue::Disabled
    }

    /// Returns `true` when an image is in effect.
    pub fn is_as_image(&self, node: &ConfigNode) -> bool {
        matches!(self.get(node), PointStyleValue::Image(_))
    }

    /// Returns `true` when a canvas is in effect.
    pub fn is_as_canvas(&self, node: &ConfigNode) -> bool {
        matches!(self.get(node), PointStyleValue::Canvas(_))
    }

    /// Returns `true` when a callback is in effect.
    pub fn is_as_callback(&self, node: &ConfigNode) -> bool {
        matches!(self.get(node), PointStyleValue::Callback(_))
    }
}
