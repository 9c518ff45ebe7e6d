// SPDX-License-Identifier: MIT OR Apache-2.0

//! Font mixin.
//!
//! Any node with a `font` sub-node gets its accessors by composing a
//! [`FontResolver`]; the font itself is a child node read through [`Font`].

use crate::domain::{ConfigError, FromNative, NativeValue, PropertyEnum, PropertyKey, Result};
use crate::service::{decode_enum, ConfigNode, Polymorphic, Shape};

crate::property_keys! {
    /// Slot names of a font node.
    pub mod font_keys {
        /// Size in pixels
        SIZE => "size",
        /// Font family list
        FAMILY => "family",
        /// Font style
        STYLE => "style",
        /// Font weight
        WEIGHT => "weight",
        /// Line height
        LINE_HEIGHT => "lineHeight",
    }
}

/// CSS font style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// `normal`
    Normal,
    /// `italic`
    Italic,
    /// `oblique`
    Oblique,
    /// `initial`
    Initial,
    /// `inherit`
    Inherit,
}

impl PropertyEnum for FontStyle {
    fn value(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
            FontStyle::Initial => "initial",
            FontStyle::Inherit => "inherit",
        }
    }

    fn values() -> &'static [Self] {
        &[
            FontStyle::Normal,
            FontStyle::Italic,
            FontStyle::Oblique,
            FontStyle::Initial,
            FontStyle::Inherit,
        ]
    }
}

/// Keyword font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeightKeyword {
    /// `normal`
    Normal,
    /// `bold`
    Bold,
    /// `lighter`
    Lighter,
    /// `bolder`
    Bolder,
}

impl PropertyEnum for WeightKeyword {
    fn value(&self) -> &'static str {
        match self {
            WeightKeyword::Normal => "normal",
            WeightKeyword::Bold => "bold",
            WeightKeyword::Lighter => "lighter",
            WeightKeyword::Bolder => "bolder",
        }
    }

    fn values() -> &'static [Self] {
        &[
            WeightKeyword::Normal,
            WeightKeyword::Bold,
            WeightKeyword::Lighter,
            WeightKeyword::Bolder,
        ]
    }
}

/// A font weight, by keyword or numerically (1 to 1000).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    /// A keyword
    Keyword(WeightKeyword),
    /// A numeric weight
    Numeric(u32),
}

impl Polymorphic for FontWeight {
    const SHAPES: &'static [Shape] = &[Shape::String, Shape::Number];

    fn decode_shape(shape: Shape, value: &NativeValue) -> Option<Self> {
        match shape {
            Shape::String => decode_enum::<WeightKeyword>(value).map(FontWeight::Keyword),
            Shape::Number => u32::from_native(value)
                .filter(|weight| (1..=1000).contains(weight))
                .map(FontWeight::Numeric),
            _ => None,
        }
    }

    fn encode(&self) -> NativeValue {
        match self {
            FontWeight::Keyword(keyword) => NativeValue::from(keyword.value()),
            FontWeight::Numeric(weight) => NativeValue::from(*weight),
        }
    }
}

/// A line height: a factor of the font size, or a CSS length such as `"20px"`.
#[derive(Clone, Debug, PartialEq)]
pub enum LineHeight {
    /// Multiple of the font size
    Factor(f64),
    /// A CSS length string
    Text(String),
}

impl Polymorphic for LineHeight {
    const SHAPES: &'static [Shape] = &[Shape::String, Shape::Number];

    fn decode_shape(shape: Shape, value: &NativeValue) -> Option<Self> {
        match (shape, value) {
            (Shape::String, NativeValue::String(text)) => Some(LineHeight::Text(text.clone())),
            (Shape::Number, NativeValue::Number(factor)) if *factor >= 0.0 => {
                Some(LineHeight::Factor(*factor))
            }
            _ => None,
        }
    }

    fn encode(&self) -> NativeValue {
        match self {
            LineHeight::Factor(factor) => NativeValue::from(*factor),
            LineHeight::Text(text) => NativeValue::from(text.as_str()),
        }
    }
}

/// Built-in font size in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
/// Built-in font family.
pub const DEFAULT_FONT_FAMILY: &str = "'Helvetica Neue', 'Helvetica', 'Arial', sans-serif";
/// Built-in line height factor.
pub const DEFAULT_LINE_HEIGHT: f64 = 1.2;

/// Composes font accessors into a node type.
#[derive(Clone, Debug)]
pub struct FontResolver {
    key: PropertyKey,
}

impl FontResolver {
    /// Creates a resolver for the font stored under `key`.
    pub const fn new(key: PropertyKey) -> Self {
        FontResolver { key }
    }

    /// Returns the font of `node`. Nothing is written until a setter is used.
    pub fn font(&self, node: &ConfigNode) -> Font {
        Font {
            node: node.child(&self.key),
        }
    }
}

/// View over a font node.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::PropertyKey;
/// use chartcfg::resolvers::{FontResolver, FontWeight, WeightKeyword};
/// use chartcfg::service::{ConfigNode, DefaultProviderChain};
/// use std::rc::Rc;
///
/// const FONT: FontResolver = FontResolver::new(PropertyKey::new("FONT", "font"));
///
/// let root = ConfigNode::new(Rc::new(DefaultProviderChain::empty()));
/// let font = FONT.font(&root);
/// assert_eq!(font.get_weight(), FontWeight::Keyword(WeightKeyword::Normal));
///
/// font.set_weight(FontWeight::Numeric(600)).unwrap();
/// assert_eq!(root.to_json().unwrap(), r#"{"font":{"weight":600}}"#);
/// ```
#[derive(Clone, Debug)]
pub struct Font {
    node: ConfigNode,
}

impl Font {
    /// Returns the underlying node.
    pub fn node(&self) -> &ConfigNode {
        &self.node
    }

    /// Returns the size in pixels.
    pub fn get_size(&self) -> f64 {
        self.node.get_value(&font_keys::SIZE, DEFAULT_FONT_SIZE)
    }

    /// Sets the size in pixels.
    pub fn set_size(&self, size: f64) -> Result<()> {
        self.node.set_non_negative(&font_keys::SIZE, size)
    }

    /// Returns the family list.
    pub fn get_family(&self) -> String {
        self.node
            .get_value(&font_keys::FAMILY, DEFAULT_FONT_FAMILY.to_string())
    }

    /// Sets the family list.
    pub fn set_family(&self, family: &str) -> Result<()> {
        self.node.set_value(&font_keys::FAMILY, family)
    }

    /// Returns the style.
    pub fn get_style(&self) -> FontStyle {
        self.node.get_enum(&font_keys::STYLE, FontStyle::Normal)
    }

    /// Sets the style.
    pub fn set_style(&self, style: FontStyle) -> Result<()> {
        self.node.set_enum(&font_keys::STYLE, style)
    }

    /// Returns the weight.
    pub fn get_weight(&self) -> FontWeight {
        self.node.get_polymorphic(
            &font_keys::WEIGHT,
            FontWeight::Keyword(WeightKeyword::Normal),
        )
    }

    /// Sets the weight. Numeric weights must lie in `1..=1000`.
    pub fn set_weight(&self, weight: FontWeight) -> Result<()> {
        if let FontWeight::Numeric(n) = weight {
            if !(1..=1000).contains(&n) {
                return Err(ConfigError::InvalidArgument {
                    key: font_keys::WEIGHT.value().to_string(),
                    message: format!("weight {} must be between 1 and 1000", n),
                });
            }
        }
        self.node.set_polymorphic(&font_keys::WEIGHT, &weight)
    }

    /// Returns the line height.
    pub fn get_line_height(&self) -> LineHeight {
        self.node.get_polymorphic(
            &font_keys::LINE_HEIGHT,
            LineHeight::Factor(DEFAULT_LINE_HEIGHT),
        )
    }

    /// Sets the line height.
    pub fn set_line_height(&self, line_height: &LineHeight) -> Result<()> {
        if let LineHeight::Factor(factor) = line_height {
            return self.node.set_non_negative(&font_keys::LINE_HEIGHT, *factor);
        }
        self.node.set_polymorphic(&font_keys::LINE_HEIGHT, line_height)
    }

    /// Returns `true` when the line height is a CSS length.
    pub fn is_line_height_as_text(&self) -> bool {
        matches!(self.get_line_height(), LineHeight::Text(_))
    }
}
