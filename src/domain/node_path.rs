// SPDX-License-Identifier: MIT OR Apache-2.0

//! Location of a configuration node inside its tree.

use crate::domain::property_key::PropertyKey;
use std::fmt;

/// The attach keys from the root down to a node.
///
/// Default tables mirror the node key space, so a node's path is also where its
/// defaults live inside each table.
///
/// # Examples
///
/// ```
/// use chartcfg::domain::{NodePath, PropertyKey};
///
/// const LAYOUT: PropertyKey = PropertyKey::new("LAYOUT", "layout");
/// const PADDING: PropertyKey = PropertyKey::new("PADDING", "padding");
///
/// let path = NodePath::root().child(&LAYOUT).child(&PADDING);
/// assert_eq!(path.to_string(), "layout.padding");
/// assert_eq!(path.depth(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<String>);

impl NodePath {
    /// The path of a root node.
    pub fn root() -> Self {
        NodePath(Vec::new())
    }

    /// Builds a path from raw segments.
    pub fn from_segments<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        NodePath(segments.into_iter().map(Into::into).collect())
    }

    /// Returns the path of the child attached under `key`.
    pub fn child(&self, key: &PropertyKey) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.value().to_string());
        NodePath(segments)
    }

    /// Returns the segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of segments.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        let root = NodePath::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let key = PropertyKey::new("FONT", "font");
        let root = NodePath::root();
        let child = root.child(&key);
        assert!(root.is_root());
        assert_eq!(child.segments(), &["font".to_string()]);
    }

    #[test]
    fn test_from_segments() {
        let path = NodePath::from_segments(["elements", "bar"]);
        assert_eq!(path.depth(), 2);
        assert_eq!(path.to_string(), "elements.bar");
    }
}
