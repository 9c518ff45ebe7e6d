// SPDX-License-Identifier: MIT OR Apache-2.0

//! Which edge of a bar is drawn without a border.

use crate::domain::{CallbackMarker, NativeValue, PropertyEnum, PropertyKey, Result};
use crate::service::{decode, decode_enum, ConfigNode, Polymorphic, Shape, StoredForm};

/// A bar edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The edge at the base of the bar
    Start,
    /// The edge at the tip of the bar
    End,
    /// Both base and tip, for floating bars
    Middle,
    /// `bottom`
    Bottom,
    /// `left`
    Left,
    /// `top`
    Top,
    /// `right`
    Right,
}

impl PropertyEnum for Edge {
    fn value(&self) -> &'static str {
        match self {
            Edge::Start => "start",
            Edge::End => "end",
            Edge::Middle => "middle",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Top => "top",
            Edge::Right => "right",
        }
    }

    fn values() -> &'static [Self] {
        &[
            Edge::Start,
            Edge::End,
            Edge::Middle,
            Edge::Bottom,
            Edge::Left,
            Edge::Top,
            Edge::Right,
        ]
    }
}

/// A decoded border-skipped value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderSkip {
    /// The named edge is skipped
    Edge(Edge),
    /// No edge is skipped, stored as `false`
    Disabled,
    /// Computed by a host callback
    Callback(CallbackMarker),
}

impl Polymorphic for BorderSkip {
    const SHAPES: &'static [Shape] = &[Shape::Callback, Shape::Boolean, Shape::String];

    fn decode_shape(shape: Shape, value: &NativeValue) -> Option<Self> {
        match (shape, value) {
            (Shape::Callback, NativeValue::Callback(marker)) => Some(BorderSkip::Callback(*marker)),
            (Shape::Boolean, NativeValue::Boolean(false)) => Some(BorderSkip::Disabled),
            (Shape::String, value) => decode_enum::<Edge>(value).map(BorderSkip::Edge),
            _ => None,
        }
    }

    fn encode(&self) -> NativeValue {
        match self {
            BorderSkip::Edge(edge) => NativeValue::from(edge.value()),
            BorderSkip::Disabled => NativeValue::Boolean(false),
            BorderSkip::Callback(marker) => NativeValue::Callback(*marker),
        }
    }
}

impl From<BorderSkip> for NativeValue {
    fn from(value: BorderSkip) -> Self {
        value.encode()
    }
}

/// Accessors for one border-skipped property, single or per data element.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::PropertyKey;
/// use chartcfg::resolvers::{BorderSkip, BorderSkippedResolver, Edge};
/// use chartcfg::service::{ConfigNode, DefaultProviderChain};
/// use std::rc::Rc;
///
/// const SKIPPED: BorderSkippedResolver =
///     BorderSkippedResolver::new(PropertyKey::new("BORDER_SKIPPED", "borderSkipped"), Edge::Start);
///
/// let node = ConfigNode::new(Rc::new(DefaultProviderChain::empty()));
/// SKIPPED.set_all(&node, &[BorderSkip::Edge(Edge::Top), BorderSkip::Disabled]).unwrap();
/// assert_eq!(
///     SKIPPED.get_all(&node),
///     vec![BorderSkip::Edge(Edge::Top), BorderSkip::Disabled]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct BorderSkippedResolver {
    key: PropertyKey,
    literal: Edge,
}

impl BorderSkippedResolver {
    /// Creates the accessors for `key`, with `literal` as the built-in default.
    pub const fn new(key: PropertyKey, literal: Edge) -> Self {
        BorderSkippedResolver { key, literal }
    }

    /// Returns the property key.
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    /// Returns the effective value. When one value per element is stored, the
    /// first one is returned.
    pub fn get(&self, node: &ConfigNode) -> BorderSkip {
        self.get_all(node)
            .into_iter()
            .next()
            .unwrap_or(BorderSkip::Edge(self.literal))
    }

    /// Returns the effective values, one per element or a single one.
    pub fn get_all(&self, node: &ConfigNode) -> Vec<BorderSkip> {
        node.get_list_with(&self.key, decode::<BorderSkip>, BorderSkip::Edge(self.literal))
    }

    /// Returns the skipped edge; `Disabled` and callbacks read as `None`.
    pub fn get_edge(&self, node: &ConfigNode) -> Option<Edge> {
        match self.get(node) {
            BorderSkip::Edge(edge) => Some(edge),
            _ => None,
        }
    }

    /// Stores one value.
    pub fn set(&self, node: &ConfigNode, value: BorderSkip) -> Result<()> {
        node.set_one(&self.key, value)
    }

    /// Stores one value per element; a single value is stored bare.
    pub fn set_all(&self, node: &ConfigNode, values: &[BorderSkip]) -> Result<()> {
        node.set_values(&self.key, values)
    }

    /// Skips the given edge.
    pub fn set_edge(&self, node: &ConfigNode, edge: Edge) -> Result<()> {
        self.set(node, BorderSkip::Edge(edge))
    }

    /// Draws every edge.
    pub fn set_disabled(&self, node: &ConfigNode) -> Result<()> {
        self.set(node, BorderSkip::Disabled)
    }

    /// Sets a callback computing the edge.
    pub fn set_callback(&self, node: &ConfigNode, marker: CallbackMarker) -> Result<()> {
        self.set(node, BorderSkip::Callback(marker))
    }

    /// Returns `true` when every edge is drawn.
    pub fn is_disabled(&self, node: &ConfigNode) -> bool {
        self.get(node) == BorderSkip::Disabled
    }

    /// Returns `true` when a callback is in effect.
    pub fn is_as_callback(&self, node: &ConfigNode) -> bool {
        matches!(self.get(node), BorderSkip::Callback(_))
    }

    /// Returns `true` when the node stores one value per element.
    pub fn is_as_array(&self, node: &ConfigNode) -> bool {
        node.stored_form(&self.key) == Some(StoredForm::Many)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::DefaultProviderChain;
    use std::rc::Rc;

    const SKIPPED: BorderSkippedResolver = BorderSkippedResolver::new(
        PropertyKey::new("BORDER_SKIPPED", "borderSkipped"),
        Edge::Start,
    );

    fn node() -> ConfigNode {
        ConfigNode::new(Rc::new(DefaultProviderChain::empty()))
    }

    #[test]
    fn test_absent_is_literal() {
        let node = node();
        assert_eq!(SKIPPED.get(&node), BorderSkip::Edge(Edge::Start));
        assert_eq!(SKIPPED.get_edge(&node), Some(Edge::Start));
        assert!(!SKIPPED.is_disabled(&node));
    }

    #[test]
    fn test_false_decodes_to_disabled() {
        let node = node();
        node.set_value(SKIPPED.key(), false).unwrap();
        assert_eq!(SKIPPED.get(&node), BorderSkip::Disabled);
        assert!(SKIPPED.is_disabled(&node));
        assert_eq!(SKIPPED.get_edge(&node), None);
    }

    #[test]
    fn test_edge_round_trip() {
        let node = node();
        for edge in Edge::values() {
            SKIPPED.set_edge(&node, *edge).unwrap();
            assert_eq!(SKIPPED.get_edge(&node), Some(*edge));
        }
    }

    #[test]
    fn test_per_element_values() {
        let node = node();
        let values = [
            BorderSkip::Edge(Edge::Bottom),
            BorderSkip::Disabled,
            BorderSkip::Edge(Edge::Left),
        ];
        SKIPPED.set_all(&node, &values).unwrap();
        assert_eq!(node.stored_form(SKIPPED.key()), Some(StoredForm::Many));
        assert!(SKIPPED.is_as_array(&node));
        assert_eq!(SKIPPED.get_all(&node), values.to_vec());
        assert_eq!(SKIPPED.get(&node), BorderSkip::Edge(Edge::Bottom));

        SKIPPED.set_disabled(&node).unwrap();
        assert_eq!(node.stored_form(SKIPPED.key()), Some(StoredForm::Single));
        assert!(!SKIPPED.is_as_array(&node));
        assert_eq!(SKIPPED.get_all(&node), vec![BorderSkip::Disabled]);
    }

    #[test]
    fn test_callback() {
        let node = node();
        let marker = CallbackMarker::new();
        SKIPPED.set_callback(&node, marker).unwrap();
        assert!(SKIPPED.is_as_callback(&node));
        assert_eq!(SKIPPED.get(&node), BorderSkip::Callback(marker));
    }

    #[test]
    fn test_true_reads_as_absent() {
        let node = node();
        node.set_value(SKIPPED.key(), true).unwrap();
        assert_eq!(SKIPPED.get(&node), BorderSkip::Edge(Edge::Start));
    }
}
