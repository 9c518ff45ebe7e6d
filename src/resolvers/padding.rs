// SPDX-License-Identifier: MIT OR Apache-2.0

//! Padding mixin.
//!
//! Padding is stored either as one number for all four sides or as an object
//! with one slot per side. A uniform number is only expanded into an object
//! when a single side is written.

use crate::domain::{ConfigError, FromNative, NativeObject, PropertyEnum, PropertyKey, Result};
use crate::service::ConfigNode;

crate::property_keys! {
    /// Slot names of a padding node.
    pub mod padding_keys {
        /// Top side
        TOP => "top",
        /// Right side
        RIGHT => "right",
        /// Bottom side
        BOTTOM => "bottom",
        /// Left side
        LEFT => "left",
    }
}

/// One side of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top
    Top,
    /// Right
    Right,
    /// Bottom
    Bottom,
    /// Left
    Left,
}

impl PropertyEnum for Side {
    fn value(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    fn values() -> &'static [Self] {
        &[Side::Top, Side::Right, Side::Bottom, Side::Left]
    }
}

impl Side {
    /// Returns the slot name of this side.
    pub const fn key(&self) -> PropertyKey {
        match self {
            Side::Top => padding_keys::TOP,
            Side::Right => padding_keys::RIGHT,
            Side::Bottom => padding_keys::BOTTOM,
            Side::Left => padding_keys::LEFT,
        }
    }
}

/// Composes padding accessors into a node type.
#[derive(Clone, Debug)]
pub struct PaddingResolver {
    key: PropertyKey,
    literal: f64,
}

impl PaddingResolver {
    /// Creates a resolver for the padding stored under `key`, with `literal`
    /// as the built-in default of every side.
    pub const fn new(key: PropertyKey, literal: f64) -> Self {
        PaddingResolver { key, literal }
    }

    /// Returns the padding of `node`. Nothing is written until a setter is
    /// used.
    pub fn padding(&self, node: &ConfigNode) -> Padding {
        Padding {
            owner: node.clone(),
            key: self.key.clone(),
            literal: self.literal,
        }
    }
}

/// View over the padding of one node.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::PropertyKey;
/// use chartcfg::resolvers::PaddingResolver;
/// use chartcfg::service::{ConfigNode, DefaultProviderChain};
/// use std::rc::Rc;
///
/// const PADDING: PaddingResolver = PaddingResolver::new(PropertyKey::new("PADDING", "padding"), 0.0);
///
/// let layout = ConfigNode::new(Rc::new(DefaultProviderChain::empty()));
/// let padding = PADDING.padding(&layout);
///
/// padding.set_uniform(4.0).unwrap();
/// assert_eq!(padding.get_left(), 4.0);
///
/// padding.set_top(10.0).unwrap();
/// assert_eq!(
///     layout.to_json().unwrap(),
///     r#"{"padding":{"top":10,"right":4,"bottom":4,"left":4}}"#
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Padding {
    owner: ConfigNode,
    key: PropertyKey,
    literal: f64,
}

impl Padding {
    /// Returns the padding node. It is detached until written.
    pub fn node(&self) -> ConfigNode {
        self.owner.child(&self.key)
    }

    /// Returns the uniform padding if one number is stored locally.
    pub fn get_uniform(&self) -> Option<f64> {
        f64::from_native(&self.owner.get_local(&self.key)?)
    }

    /// Returns `true` if one number is stored for all sides.
    pub fn is_uniform(&self) -> bool {
        self.get_uniform().is_some()
    }

    /// Returns the padding of one side.
    ///
    /// Lookup order: local uniform number, local side, side default, uniform
    /// default, built-in literal.
    pub fn get(&self, side: Side) -> f64 {
        if let Some(uniform) = self.get_uniform() {
            return uniform;
        }
        self.node()
            .find_with(&side.key(), f64::from_native)
            .or_else(|| {
                self.owner
                    .chain()
                    .resolve_with(self.owner.path(), &self.key, f64::from_native)
            })
            .unwrap_or(self.literal)
    }

    /// Sets the padding of one side, expanding a uniform number first.
    pub fn set(&self, side: Side, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::negative(
                format!("{}.{}", self.key, side.value()),
                value,
            ));
        }
        if let Some(uniform) = self.get_uniform() {
            tracing::debug!("Expanding uniform {} at '{}'", self.key, self.owner.path());
            let expanded = NativeObject::from_entries(
                Side::values().iter().map(|s| (s.value(), uniform)),
            );
            self.owner.set_value(&self.key, expanded)?;
        }
        self.node().set_value(&side.key(), value)
    }

    /// Sets one number for all four sides, replacing any per-side object.
    pub fn set_uniform(&self, value: f64) -> Result<()> {
        self.owner.set_non_negative(&self.key, value)
    }

    /// Removes the local padding entirely.
    pub fn clear(&self) {
        self.owner.remove(&self.key);
    }

    /// Returns the top padding.
    pub fn get_top(&self) -> f64 {
        self.get(Side::Top)
    }

    /// Sets the top padding.
    pub fn set_top(&self, value: f64) -> Result<()> {
        self.set(Side::Top, value)
    }

    /// Returns the right padding.
    pub fn get_right(&self) -> f64 {
        self.get(Side::Right)
    }

    /// Sets the right padding.
    pub fn set_right(&self, value: f64) -> Result<()> {
        self.set(Side::Right, value)
    }

    /// Returns the bottom padding.
    pub fn get_bottom(&self) -> f64 {
        self.get(Side::Bottom)
    }

    /// Sets the bottom padding.
    pub fn set_bottom(&self, value: f64) -> Result<()> {
        self.set(Side::Bottom, value)
    }

    /// Returns the left padding.
    pub fn get_left(&self) -> f64 {
        self.get(Side::Left)
    }

    /// Sets the left padding.
    pub fn set_left(&self, value: f64) -> Result<()> {
        self.set(Side::Left, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::DefaultTable;
    use crate::service::DefaultProviderChain;
    use std::rc::Rc;

    const PADDING: PaddingResolver =
        PaddingResolver::new(PropertyKey::new("PADDING", "padding"), 0.0);

    fn root_with(defaults: NativeObject) -> ConfigNode {
        let chain = DefaultProviderChain::builder()
            .with_table(DefaultTable::global(defaults))
            .build();
        ConfigNode::new(Rc::new(chain))
    }

    #[test]
    fn test_read_does_not_attach() {
        let root = root_with(NativeObject::new());
        let padding = PADDING.padding(&root);
        assert_eq!(padding.get_top(), 0.0);
        assert!(root.is_empty());
    }

    #[test]
    fn test_side_default_then_uniform_default() {
        let defaults = NativeObject::new();
        defaults.set("padding", NativeObject::from_entries([("top", 3)]).into());
        let padding = PADDING.padding(&root_with(defaults));
        assert_eq!(padding.get_top(), 3.0);
        assert_eq!(padding.get_left(), 0.0);

        let uniform = PADDING.padding(&root_with(NativeObject::from_entries([("padding", 6)])));
        assert_eq!(uniform.get_bottom(), 6.0);
    }

    #[test]
    fn test_set_side() {
        let root = root_with(NativeObject::new());
        let padding = PADDING.padding(&root);
        padding.set_top(5.0).unwrap();

        assert_eq!(padding.get_top(), 5.0);
        assert_eq!(root.to_json().unwrap(), r#"{"padding":{"top":5}}"#);
        assert!(!padding.is_uniform());
    }

    #[test]
    fn test_uniform_overrides_sides() {
        let root = root_with(NativeObject::new());
        let padding = PADDING.padding(&root);
        padding.set_left(1.0).unwrap();
        padding.set_uniform(8.0).unwrap();

        assert!(padding.is_uniform());
        for side in Side::values() {
            assert_eq!(padding.get(*side), 8.0);
        }
        assert_eq!(root.to_json().unwrap(), r#"{"padding":8}"#);
    }

    #[test]
    fn test_expand_on_side_write() {
        let root = root_with(NativeObject::new());
        let padding = PADDING.padding(&root);
        padding.set_uniform(2.0).unwrap();
        padding.set_right(7.0).unwrap();

        assert!(!padding.is_uniform());
        assert_eq!(padding.get_top(), 2.0);
        assert_eq!(padding.get_right(), 7.0);
        assert_eq!(
            root.to_json().unwrap(),
            r#"{"padding":{"top":2,"right":7,"bottom":2,"left":2}}"#
        );
    }

    #[test]
    fn test_negative_rejected() {
        let root = root_with(NativeObject::new());
        let padding = PADDING.padding(&root);
        assert!(padding.set_top(-1.0).is_err());
        assert!(padding.set_uniform(-1.0).is_err());
        assert!(root.is_empty());
    }

    #[test]
    fn test_non_finite_rejected() {
        let root = root_with(NativeObject::new());
        let padding = PADDING.padding(&root);
        assert!(padding.set_top(f64::NAN).is_err());
        assert!(padding.set(Side::Left, f64::INFINITY).is_err());
        assert!(padding.set_uniform(f64::NAN).is_err());
        assert!(root.is_empty());
    }

    #[test]
    fn test_clear() {
        let root = root_with(NativeObject::new());
        let padding = PADDING.padding(&root);
        padding.set_bottom(4.0).unwrap();
        padding.clear();
        assert_eq!(padding.get_bottom(), 0.0);
        assert!(root.is_empty());
    }
}
