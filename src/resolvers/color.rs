// SPDX-License-Identifier: MIT OR Apache-2.0

//! Colors: a CSS color string, a gradient, a pattern, or a callback, either
//! once or per data element.

use crate::domain::{
    CallbackMarker, ConfigError, ExternalHandle, FromNative, HandleKind, NativeValue, PropertyKey,
    Result,
};
use crate::service::{decode, ConfigNode, Polymorphic, Shape, StoredForm};

/// A decoded color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    /// A CSS color string
    Color(String),
    /// A canvas gradient
    Gradient(ExternalHandle),
    /// A canvas pattern
    Pattern(ExternalHandle),
    /// Computed by a host callback
    Callback(CallbackMarker),
}

impl Polymorphic for ColorValue {
    const SHAPES: &'static [Shape] = &[
        Shape::Gradient,
        Shape::Pattern,
        Shape::Callback,
        Shape::String,
    ];

    fn decode_shape(shape: Shape, value: &NativeValue) -> Option<Self> {
        match (shape, value) {
            (Shape::Gradient, NativeValue::External(handle)) => Some(ColorValue::Gradient(*handle)),
            (Shape::Pattern, NativeValue::External(handle)) => Some(ColorValue::Pattern(*handle)),
            (Shape::Callback, NativeValue::Callback(marker)) => Some(ColorValue::Callback(*marker)),
            (Shape::String, NativeValue::String(color)) => Some(ColorValue::Color(color.clone())),
            _ => None,
        }
    }

    fn encode(&self) -> NativeValue {
        match self {
            ColorValue::Color(color) => NativeValue::from(color.as_str()),
            ColorValue::Gradient(handle) | ColorValue::Pattern(handle) => {
                NativeValue::External(*handle)
            }
            ColorValue::Callback(marker) => NativeValue::Callback(*marker),
        }
    }
}

impl From<ColorValue> for NativeValue {
    fn from(value: ColorValue) -> Self {
        value.encode()
    }
}

impl From<&str> for ColorValue {
    fn from(color: &str) -> Self {
        ColorValue::Color(color.to_string())
    }
}

/// Accessors for one color property.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::{ExternalHandle, HandleKind, PropertyKey};
/// use chartcfg::resolvers::ColorResolver;
/// use chartcfg::service::{ConfigNode, DefaultProviderChain};
/// use std::rc::Rc;
///
/// const BACKGROUND: ColorResolver =
///     ColorResolver::new(PropertyKey::new("BACKGROUND_COLOR", "backgroundColor"), "rgba(0,0,0,0.1)");
///
/// let node = ConfigNode::new(Rc::new(DefaultProviderChain::empty()));
/// let gradient = ExternalHandle::new(HandleKind::Gradient);
/// BACKGROUND.set_gradient(&node, gradient).unwrap();
///
/// assert_eq!(BACKGROUND.get_as_string(&node), "rgba(0,0,0,0.1)");
/// assert_eq!(BACKGROUND.get_as_gradient(&node), Some(gradient));
/// ```
#[derive(Clone, Debug)]
pub struct ColorResolver {
    key: PropertyKey,
    literal: &'static str,
}

impl ColorResolver {
    /// Creates the accessors for `key`, with `literal` as the built-in default.
    pub const fn new(key: PropertyKey, literal: &'static str) -> Self {
        ColorResolver { key, literal }
    }

    /// Returns the property key.
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    /// Returns the effective value; per-element colors yield the first one.
    pub fn get(&self, node: &ConfigNode) -> ColorValue {
        self.get_colors(node)
            .into_iter()
            .next()
            .unwrap_or_else(|| self.literal.into())
    }

    /// Returns the color string. When a gradient, pattern or callback is in
    /// effect, the default color string is returned instead.
    pub fn get_as_string(&self, node: &ConfigNode) -> String {
        match self.get(node) {
            ColorValue::Color(color) => color,
            _ => node.get_default_with(&self.key, String::from_native, self.literal.to_string()),
        }
    }

    /// Returns the gradient, if that is what is in effect.
    pub fn get_as_gradient(&self, node: &ConfigNode) -> Option<ExternalHandle> {
        match self.get(node) {
            ColorValue::Gradient(handle) => Some(handle),
            _ => None,
        }
    }

    /// Returns the pattern, if that is what is in effect.
    pub fn get_as_pattern(&self, node: &ConfigNode) -> Option<ExternalHandle> {
        match self.get(node) {
            ColorValue::Pattern(handle) => Some(handle),
            _ => None,
        }
    }

    /// Returns the colors, one per element or a single one.
    pub fn get_colors(&self, node: &ConfigNode) -> Vec<ColorValue> {
        node.get_list_with(&self.key, decode::<ColorValue>, self.literal.into())
    }

    /// Returns the color strings, dropping gradients, patterns and callbacks.
    pub fn get_colors_as_strings(&self, node: &ConfigNode) -> Vec<String> {
        self.get_colors(node)
            .into_iter()
            .filter_map(|color| match color {
                ColorValue::Color(color) => Some(color),
                _ => None,
            })
            .collect()
    }

    /// Sets a color string.
    pub fn set_color(&self, node: &ConfigNode, color: &str) -> Result<()> {
        node.set_one(&self.key, color)
    }

    /// Sets a gradient; any other handle kind is rejected.
    pub fn set_gradient(&self, node: &ConfigNode, gradient: ExternalHandle) -> Result<()> {
        self.check_handle(HandleKind::Gradient, &gradient)?;
        node.set_one(&self.key, gradient)
    }

    /// Sets a pattern; any other handle kind is rejected.
    pub fn set_pattern(&self, node: &ConfigNode, pattern: ExternalHandle) -> Result<()> {
        self.check_handle(HandleKind::Pattern, &pattern)?;
        node.set_one(&self.key, pattern)
    }

    /// Sets a callback computing the color.
    pub fn set_callback(&self, node: &ConfigNode, marker: CallbackMarker) -> Result<()> {
        node.set_one(&self.key, marker)
    }

    /// Sets colors per element; a single color is stored bare.
    pub fn set_colors(&self, node: &ConfigNode, colors: &[ColorValue]) -> Result<()> {
        for color in colors {
            match color {
                ColorValue::Gradient(handle) => self.check_handle(HandleKind::Gradient, handle)?,
                ColorValue::Pattern(handle) => self.check_handle(HandleKind::Pattern, handle)?,
                _ => {}
            }
        }
        node.set_values(&self.key, colors)
    }

    fn check_handle(&self, expected: HandleKind, handle: &ExternalHandle) -> Result<()> {
        if handle.kind() == expected {
            Ok(())
        } else {
            Err(ConfigError::wrong_handle(
                self.key.value(),
                expected,
                handle.kind(),
            ))
        }
    }

    /// Returns `true` when a color string is in effect.
    pub fn is_as_string(&self, node: &ConfigNode) -> bool {
        matches!(self.get(node), ColorValue::Color(_))
    }

    /// Returns `true` when a gradient is in effect.
    pub fn is_as_gradient(&self, node: &ConfigNode) -> bool {
        matches!(self.get(node), ColorValue::Gradient(_))
    }

    /// Returns `true` when a pattern is in effect.
    pub fn is_as_pattern(&self, node: &ConfigNode) -> bool {
        matches!(self.get(node), ColorValue::Pattern(_))
    }

    /// Returns `true` when a callback is in effect.
    pub fn is_as_callback(&self, node: &ConfigNode) -> bool {
        matches!(self.get(node), ColorValue::Callback(_))
    }

    /// Returns `true` when the node stores one value per element.
    pub fn is_as_array(&self, node: &ConfigNode) -> bool {
        node.stored_form(&self.key) == Some(StoredForm::Many)
    }
}
