// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default provider adapters.
//!
//! This module provides [`DefaultTable`], a provider over a nested native
//! object sharing the node key space, and [`FnProvider`], a provider computed
//! by a closure.

use crate::domain::{NativeObject, NativeValue, NodePath, PropertyKey, Result};
use crate::ports::{DefaultProvider, PRIORITY_CATEGORY, PRIORITY_GLOBAL, PRIORITY_LOCAL};

/// A default provider backed by a nested native object.
///
/// The value for `key` on the node at path `a.b` lives at `root.a.b.key`.
/// The root is a shared handle: every clone of a table, and therefore every
/// chain holding one, sees writes made through [`set`](DefaultTable::set) or
/// [`merge`](DefaultTable::merge) immediately.
///
/// # Examples
///
/// ```rust
/// use chartcfg::adapters::DefaultTable;
/// use chartcfg::domain::{NativeObject, NativeValue, NodePath, PropertyKey};
/// use chartcfg::ports::DefaultProvider;
///
/// const PADDING: PropertyKey = PropertyKey::new("PADDING", "padding");
/// const TOP: PropertyKey = PropertyKey::new("TOP", "top");
///
/// let table = DefaultTable::global(NativeObject::new());
/// let path = NodePath::root().child(&PADDING);
/// table.set(&path, &TOP, NativeValue::from(4)).unwrap();
///
/// assert_eq!(table.resolve(&path, &TOP), Some(NativeValue::from(4)));
/// assert_eq!(table.resolve(&NodePath::root(), &TOP), None);
/// ```
#[derive(Clone, Debug)]
pub struct DefaultTable {
    name: String,
    priority: u8,
    root: NativeObject,
}

impl DefaultTable {
    /// Creates a table with an explicit name and priority.
    pub fn new(name: impl Into<String>, priority: u8, root: NativeObject) -> Self {
        DefaultTable {
            name: name.into(),
            priority,
            root,
        }
    }

    /// Creates the application-wide default table.
    pub fn global(root: NativeObject) -> Self {
        Self::new("global", PRIORITY_GLOBAL, root)
    }

    /// Creates the default table of one chart or dataset type.
    pub fn category(type_id: &str, root: NativeObject) -> Self {
        Self::new(format!("category:{}", type_id), PRIORITY_CATEGORY, root)
    }

    /// Creates a per-instance override table.
    pub fn overrides(root: NativeObject) -> Self {
        Self::new("overrides", PRIORITY_LOCAL, root)
    }

    /// Returns the root object of the table.
    pub fn root(&self) -> &NativeObject {
        &self.root
    }

    /// Returns the object holding the defaults of the node at `path`.
    pub fn node_at(&self, path: &NodePath) -> Option<NativeObject> {
        let mut current = self.root.clone();
        for segment in path.segments() {
            current = current.get(segment)?.as_object()?.clone();
        }
        Some(current)
    }

    /// Writes a default, creating intermediate objects as needed.
    ///
    /// An intermediate slot holding something other than an object is replaced.
    pub fn set(&self, path: &NodePath, key: &PropertyKey, value: NativeValue) -> Result<()> {
        key.check_valid()?;
        let mut current = self.root.clone();
        for segment in path.segments() {
            current = match current.get(segment) {
                Some(NativeValue::Object(object)) => object,
                other => {
                    if other.is_some() {
                        tracing::debug!(
                            "Replacing non-object slot '{}' in defaults table '{}'",
                            segment,
                            self.name
                        );
                    }
                    let object = NativeObject::new();
                    current.set(segment, NativeValue::Object(object.clone()));
                    object
                }
            };
        }
        current.set(key.value(), value);
        Ok(())
    }

    /// Removes a default and returns its previous value.
    pub fn remove(&self, path: &NodePath, key: &PropertyKey) -> Option<NativeValue> {
        self.node_at(path)?.remove(key.value())
    }

    /// Merges a theme into the table, overwriting existing leaves.
    pub fn merge(&self, theme: &NativeObject) {
        tracing::debug!("Merging theme into defaults table '{}'", self.name);
        self.root.deep_merge(theme, true);
    }
}

impl DefaultProvider for DefaultTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn resolve(&self, path: &NodePath, key: &PropertyKey) -> Option<NativeValue> {
        self.node_at(path)?.get(key.value())
    }
}

/// A default provider computed by a closure.
///
/// Used for defaults that depend on the calling context rather than on a
/// static table.
///
/// # Examples
///
/// ```rust
/// use chartcfg::adapters::FnProvider;
/// use chartcfg::domain::{NativeValue, NodePath, PropertyKey};
/// use chartcfg::ports::DefaultProvider;
///
/// let provider = FnProvider::new("hover", 3, |_path: &NodePath, key: &PropertyKey| {
///     (key.value() == "borderWidth").then(|| NativeValue::from(2))
/// });
///
/// let key = PropertyKey::new("BORDER_WIDTH", "borderWidth");
/// assert_eq!(provider.resolve(&NodePath::root(), &key), Some(NativeValue::from(2)));
/// ```
pub struct FnProvider<F> {
    name: String,
    priority: u8,
    resolver: F,
}

impl<F> FnProvider<F>
where
    F: Fn(&NodePath, &PropertyKey) -> Option<NativeValue>,
{
    /// Creates a provider from a closure.
    pub fn new(name: impl Into<String>, priority: u8, resolver: F) -> Self {
        FnProvider {
            name: name.into(),
            priority,
            resolver,
        }
    }
}

impl<F> DefaultProvider for FnProvider<F>
where
    F: Fn(&NodePath, &PropertyKey) -> Option<NativeValue>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn resolve(&self, path: &NodePath, key: &PropertyKey) -> Option<NativeValue> {
        (self.resolver)(path, key)
    }
}
