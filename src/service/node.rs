// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration tree nodes.
//!
//! A [`ConfigNode`] wraps one native map. Reads fall through to the node's
//! default provider chain when the slot is empty or holds an unusable value.
//! Writes store into the map and then attach the node, and every detached
//! ancestor, to the tree. A node that is only ever read never shows up in its
//! parent's map.

use crate::adapters::{to_json, to_json_pretty};
use crate::domain::{
    ConfigError, FromNative, NativeObject, NativeValue, NodePath, ObjectType, PropertyEnum,
    PropertyKey, Result,
};
use crate::service::chain::DefaultProviderChain;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Callback invoked after every write on a node.
pub type UpdateListener = Rc<dyn Fn(&ConfigNode)>;

struct NodeInner {
    object: RefCell<NativeObject>,
    parent: Option<ConfigNode>,
    attach_key: Option<PropertyKey>,
    attached: Cell<bool>,
    chain: Rc<DefaultProviderChain>,
    path: NodePath,
    listener: RefCell<Option<UpdateListener>>,
}

/// A handle to one node of a configuration tree.
///
/// Cloning the handle does not copy the node. A child keeps its parent alive;
/// parents never reference their child handles, only the maps installed into
/// them, so handles form no cycles.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::PropertyKey;
/// use chartcfg::service::{ConfigNode, DefaultProviderChain};
/// use std::rc::Rc;
///
/// const PADDING: PropertyKey = PropertyKey::new("PADDING", "padding");
/// const TOP: PropertyKey = PropertyKey::new("TOP", "top");
///
/// let root = ConfigNode::new(Rc::new(DefaultProviderChain::empty()));
/// let padding = root.child(&PADDING);
///
/// // Reading never attaches
/// assert_eq!(padding.get_value(&TOP, 0.0), 0.0);
/// assert!(!root.has(&PADDING));
///
/// // Writing does
/// padding.set_value(&TOP, 5).unwrap();
/// assert!(root.has(&PADDING));
/// assert_eq!(root.to_json().unwrap(), r#"{"padding":{"top":5}}"#);
/// ```
#[derive(Clone)]
pub struct ConfigNode {
    inner: Rc<NodeInner>,
}

impl ConfigNode {
    /// Creates a root node with an empty map.
    pub fn new(chain: Rc<DefaultProviderChain>) -> Self {
        Self::with_object(NativeObject::new(), chain)
    }

    /// Creates a root node wrapping existing host state.
    pub fn with_object(object: NativeObject, chain: Rc<DefaultProviderChain>) -> Self {
        ConfigNode {
            inner: Rc::new(NodeInner {
                object: RefCell::new(object),
                parent: None,
                attach_key: None,
                attached: Cell::new(true),
                chain,
                path: NodePath::root(),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Returns the child node stored under `key`.
    ///
    /// When the slot already holds an object the child wraps it. Otherwise the
    /// child starts with a fresh, detached map that is installed on its first
    /// write.
    pub fn child(&self, key: &PropertyKey) -> ConfigNode {
        let (object, attached) = match self.object().get(key.value()) {
            Some(NativeValue::Object(existing)) => (existing, self.is_attached()),
            _ => (NativeObject::new(), false),
        };
        ConfigNode {
            inner: Rc::new(NodeInner {
                object: RefCell::new(object),
                parent: Some(self.clone()),
                attach_key: Some(key.clone()),
                attached: Cell::new(attached),
                chain: Rc::clone(&self.inner.chain),
                path: self.inner.path.child(key),
                listener: RefCell::new(None),
            }),
        }
    }

    // ---- reads ----

    /// Returns the stored value of `key` decoded as `T`, falling back to the
    /// default chain and then to `literal`.
    pub fn get_value<T: FromNative>(&self, key: &PropertyKey, literal: T) -> T {
        self.get_with(key, T::from_native, literal)
    }

    /// Returns the stored value of `key` decoded with `decode`.
    ///
    /// An absent slot, or one whose value `decode` rejects, falls back to the
    /// default chain and finally to `literal`.
    pub fn get_with<T, F>(&self, key: &PropertyKey, decode: F, literal: T) -> T
    where
        F: Fn(&NativeValue) -> Option<T>,
    {
        match self.find_with(key, &decode) {
            Some(value) => value,
            None => self.get_default_with(key, decode, literal),
        }
    }

    /// Returns the stored value of `key` decoded with `decode`, or the first
    /// decodable default, or `None`.
    pub fn find_with<T, F>(&self, key: &PropertyKey, decode: F) -> Option<T>
    where
        F: Fn(&NativeValue) -> Option<T>,
    {
        if let Some(value) = self.get_local(key) {
            match decode(&value) {
                Some(decoded) => return Some(decoded),
                None => tracing::debug!(
                    "Ignoring stored {:?} for '{}' at '{}'",
                    value.object_type(),
                    key,
                    self.inner.path
                ),
            }
        }
        self.inner.chain.resolve_with(&self.inner.path, key, decode)
    }

    /// Resolves `key` through the default chain only, ignoring the local slot.
    pub fn get_default_with<T, F>(&self, key: &PropertyKey, decode: F, literal: T) -> T
    where
        F: Fn(&NativeValue) -> Option<T>,
    {
        self.inner
            .chain
            .resolve_or(&self.inner.path, key, decode, literal)
    }

    /// Returns the value stored in this node's own slot, without decoding.
    pub fn get_local(&self, key: &PropertyKey) -> Option<NativeValue> {
        self.object().get(key.value())
    }

    /// Returns the local value of `key`, or the first default, undecoded.
    pub fn get_raw(&self, key: &PropertyKey) -> Option<NativeValue> {
        self.get_local(key)
            .or_else(|| self.inner.chain.resolve(&self.inner.path, key))
    }

    /// Returns a string enumeration, falling back to `literal`.
    ///
    /// A stored string that is not a member of `E` is treated as absent.
    pub fn get_enum<E: PropertyEnum>(&self, key: &PropertyKey, literal: E) -> E {
        self.get_with(key, decode_enum::<E>, literal)
    }

    // ---- writes ----

    /// Stores `value` under `key` and attaches this node.
    pub fn set_value<V: Into<NativeValue>>(&self, key: &PropertyKey, value: V) -> Result<()> {
        key.check_valid()?;
        self.object().set(key.value(), value.into());
        self.ensure_attached();
        self.notify();
        Ok(())
    }

    /// Stores `value`, or removes the slot when `value` is `None`.
    pub fn set_optional<V: Into<NativeValue>>(
        &self,
        key: &PropertyKey,
        value: Option<V>,
    ) -> Result<()> {
        match value {
            Some(value) => self.set_value(key, value),
            None => {
                key.check_valid()?;
                self.remove(key);
                Ok(())
            }
        }
    }

    /// Stores a finite number that must be zero or positive.
    pub fn set_non_negative(&self, key: &PropertyKey, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::negative(key.value(), value));
        }
        self.set_value(key, value)
    }

    /// Stores a string enumeration by its canonical value.
    pub fn set_enum<E: PropertyEnum>(&self, key: &PropertyKey, value: E) -> Result<()> {
        self.set_value(key, value.value())
    }

    /// Deletes the slot and returns its previous value.
    ///
    /// Removing never attaches the node.
    pub fn remove(&self, key: &PropertyKey) -> Option<NativeValue> {
        let removed = self.object().remove(key.value());
        if removed.is_some() {
            self.notify();
        }
        removed
    }

    // ---- introspection ----

    /// Returns `true` if this node's own slot for `key` exists.
    pub fn has(&self, key: &PropertyKey) -> bool {
        self.object().has(key.value())
    }

    /// Returns the run-time type of this node's own slot for `key`.
    pub fn type_of(&self, key: &PropertyKey) -> ObjectType {
        self.object().type_of(key.value())
    }

    /// Returns the slot names of this node's map.
    pub fn keys(&self) -> Vec<String> {
        self.object().keys()
    }

    /// Returns `true` if this node's map has no slots.
    pub fn is_empty(&self) -> bool {
        self.object().is_empty()
    }

    /// Returns the map wrapped by this node.
    pub fn object(&self) -> NativeObject {
        self.inner.object.borrow().clone()
    }

    /// Returns the default chain shared by this tree.
    pub fn chain(&self) -> &Rc<DefaultProviderChain> {
        &self.inner.chain
    }

    /// Returns the path from the root to this node.
    pub fn path(&self) -> &NodePath {
        &self.inner.path
    }

    /// Returns the key this node is stored under in its parent.
    pub fn attach_key(&self) -> Option<&PropertyKey> {
        self.inner.attach_key.as_ref()
    }

    /// Returns the parent node.
    pub fn parent(&self) -> Option<&ConfigNode> {
        self.inner.parent.as_ref()
    }

    /// Returns the root of this node's tree.
    pub fn root(&self) -> ConfigNode {
        let mut current = self.clone();
        while let Some(parent) = current.inner.parent.clone() {
            current = parent;
        }
        current
    }

    /// Returns `true` once this node's map is part of the tree.
    pub fn is_attached(&self) -> bool {
        self.inner.attached.get()
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &ConfigNode) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ---- attachment ----

    /// Installs this node and every detached ancestor into the tree.
    ///
    /// A no-op once attached. If the parent slot already holds another map,
    /// written through a different handle for the same key, this node merges
    /// its entries into that map and adopts it. A slot holding anything other
    /// than a map is overwritten.
    pub fn ensure_attached(&self) {
        if self.inner.attached.get() {
            return;
        }
        let (Some(parent), Some(key)) = (&self.inner.parent, &self.inner.attach_key) else {
            self.inner.attached.set(true);
            return;
        };

        parent.ensure_attached();

        let parent_object = parent.object();
        let own = self.object();
        match parent_object.get(key.value()) {
            Some(NativeValue::Object(existing)) if existing.ptr_eq(&own) => {}
            Some(NativeValue::Object(existing)) => {
                tracing::debug!(
                    "Adopting existing map for '{}' at '{}'",
                    key,
                    parent.path()
                );
                adopt_entries(&existing, &own);
                *self.inner.object.borrow_mut() = existing;
            }
            other => {
                if other.is_some() {
                    tracing::debug!(
                        "Replacing non-map value for '{}' at '{}'",
                        key,
                        parent.path()
                    );
                }
                parent_object.set(key.value(), NativeValue::Object(own));
            }
        }

        self.inner.attached.set(true);
        tracing::debug!("Attached node '{}'", self.inner.path);
    }

    // ---- listeners and export ----

    /// Sets the callback invoked after every write on this node, replacing any
    /// previous one.
    pub fn set_update_listener<F>(&self, listener: F)
    where
        F: Fn(&ConfigNode) + 'static,
    {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    /// Removes the update callback.
    pub fn clear_update_listener(&self) {
        self.inner.listener.borrow_mut().take();
    }

    fn notify(&self) {
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(self);
        }
    }

    /// Serializes this node's map to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        to_json(&self.object())
    }

    /// Serializes this node's map to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        to_json_pretty(&self.object())
    }
}

/// Copies every entry of `source` into `target`, keeping nested maps aliased.
fn adopt_entries(target: &NativeObject, source: &NativeObject) {
    for (key, value) in source.entries() {
        match (target.get(&key), value) {
            (Some(NativeValue::Object(existing)), NativeValue::Object(nested))
                if !existing.ptr_eq(&nested) =>
            {
                adopt_entries(&existing, &nested);
            }
            (_, value) => target.set(&key, value),
        }
    }
}

/// Decodes a string enumeration member.
pub fn decode_enum<E: PropertyEnum>(value: &NativeValue) -> Option<E> {
    match value {
        NativeValue::String(s) => E::from_value(s),
        _ => None,
    }
}

impl fmt::Debug for ConfigNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigNode")
            .field("path", &self.inner.path.to_string())
            .field("attached", &self.inner.attached.get())
            .field("object", &self.object())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::DefaultTable;

    const LAYOUT: PropertyKey = PropertyKey::new("LAYOUT", "layout");
    const PADDING: PropertyKey = PropertyKey::new("PADDING", "padding");
    const TOP: PropertyKey = PropertyKey::new("TOP", "top");
    const LEFT: PropertyKey = PropertyKey::new("LEFT", "left");
    const ALIGN: PropertyKey = PropertyKey::new("ALIGN", "align");

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Align {
        Start,
        Center,
    }

    impl PropertyEnum for Align {
        fn value(&self) -> &'static str {
            match self {
                Align::Start => "start",
                Align::Center => "center",
            }
        }

        fn values() -> &'static [Self] {
            &[Align::Start, Align::Center]
        }
    }

    fn root() -> ConfigNode {
        ConfigNode::new(Rc::new(DefaultProviderChain::empty()))
    }

    fn root_with_defaults(defaults: NativeObject) -> ConfigNode {
        let chain = DefaultProviderChain::builder()
            .with_table(DefaultTable::global(defaults))
            .build();
        ConfigNode::new(Rc::new(chain))
    }

    #[test]
    fn test_root_is_attached() {
        let node = root();
        assert!(node.is_attached());
        assert!(node.parent().is_none());
        assert!(node.path().is_root());
    }

    #[test]
    fn test_read_does_not_attach() {
        let root = root();
        let padding = root.child(&PADDING);
        assert_eq!(padding.get_value(&TOP, 0), 0);
        assert!(!padding.is_attached());
        assert!(root.is_empty());
    }

    #[test]
    fn test_write_attaches_ancestors_in_order() {
        let root = root();
        let layout = root.child(&LAYOUT);
        let padding = layout.child(&PADDING);

        padding.set_value(&TOP, 5).unwrap();

        assert!(layout.is_attached());
        assert!(padding.is_attached());
        assert_eq!(root.to_json().unwrap(), r#"{"layout":{"padding":{"top":5}}}"#);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let root = root();
        let padding = root.child(&PADDING);
        padding.set_value(&TOP, 1).unwrap();
        let installed = root.object().get("padding").and_then(|v| v.as_object().cloned());

        padding.set_value(&LEFT, 2).unwrap();
        padding.ensure_attached();

        let again = root.object().get("padding").and_then(|v| v.as_object().cloned());
        assert!(installed.unwrap().ptr_eq(&again.unwrap()));
        assert_eq!(root.keys(), vec!["padding"]);
        assert_eq!(root.to_json().unwrap(), r#"{"padding":{"top":1,"left":2}}"#);
    }

    #[test]
    fn test_child_wraps_existing_object() {
        let object = NativeObject::new();
        object.set("padding", NativeObject::from_entries([("top", 7)]).into());
        let root = ConfigNode::with_object(object, Rc::new(DefaultProviderChain::empty()));

        let padding = root.child(&PADDING);
        assert!(padding.is_attached());
        assert_eq!(padding.get_value(&TOP, 0), 7);
    }

    #[test]
    fn test_sibling_handles_merge() {
        let root = root();
        let first = root.child(&PADDING);
        let second = root.child(&PADDING);

        first.set_value(&TOP, 1).unwrap();
        second.set_value(&LEFT, 2).unwrap();

        assert_eq!(root.to_json().unwrap(), r#"{"padding":{"top":1,"left":2}}"#);
        assert!(first.object().ptr_eq(&second.object()));
    }

    #[test]
    fn test_attach_replaces_non_map_slot() {
        let root = root();
        root.set_value(&PADDING, 4).unwrap();
        let padding = root.child(&PADDING);
        padding.set_value(&TOP, 1).unwrap();
        assert_eq!(root.to_json().unwrap(), r#"{"padding":{"top":1}}"#);
    }

    #[test]
    fn test_remove_does_not_attach() {
        let root = root();
        let padding = root.child(&PADDING);
        assert_eq!(padding.remove(&TOP), None);
        assert!(!padding.is_attached());
        assert!(root.is_empty());
    }

    #[test]
    fn test_defaults_fallback() {
        let defaults = NativeObject::new();
        defaults.set("padding", NativeObject::from_entries([("top", 3)]).into());
        let root = root_with_defaults(defaults);
        let padding = root.child(&PADDING);

        assert_eq!(padding.get_value(&TOP, 0), 3);
        assert_eq!(padding.get_value(&LEFT, 9), 9);

        padding.set_value(&TOP, 5).unwrap();
        assert_eq!(padding.get_value(&TOP, 0), 5);
        assert_eq!(padding.get_default_with(&TOP, i32::from_native, 0), 3);
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let root = root_with_defaults(NativeObject::from_entries([("top", 2)]));
        root.set_value(&TOP, "oops").unwrap();
        assert_eq!(root.get_value(&TOP, 0.0), 2.0);
        assert_eq!(root.get_raw(&TOP), Some(NativeValue::from("oops")));
    }

    #[test]
    fn test_set_optional_none_removes() {
        let root = root();
        root.set_value(&TOP, 1).unwrap();
        root.set_optional::<i32>(&TOP, None).unwrap();
        assert!(!root.has(&TOP));
        assert_eq!(root.type_of(&TOP), ObjectType::Undefined);
    }

    #[test]
    fn test_set_non_negative() {
        let root = root();
        assert!(root.set_non_negative(&TOP, 0.0).is_ok());
        let err = root.set_non_negative(&TOP, -1.0).unwrap_err();
        assert!(err.is_caller_error());
        assert_eq!(root.get_value(&TOP, 9.0), 0.0);
    }

    #[test]
    fn test_set_non_negative_rejects_non_finite() {
        let root = root();
        assert!(root.set_non_negative(&TOP, f64::NAN).is_err());
        assert!(root.set_non_negative(&TOP, f64::INFINITY).is_err());
        assert!(root.is_empty());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let root = root();
        let bad = PropertyKey::new("BAD", "");
        assert!(matches!(
            root.set_value(&bad, 1),
            Err(ConfigError::InvalidKey { .. })
        ));
        assert!(root.is_empty());
    }

    #[test]
    fn test_enum_round_trip() {
        let root = root();
        assert_eq!(root.get_enum(&ALIGN, Align::Start), Align::Start);
        root.set_enum(&ALIGN, Align::Center).unwrap();
        assert_eq!(root.get_enum(&ALIGN, Align::Start), Align::Center);

        root.set_value(&ALIGN, "sideways").unwrap();
        assert_eq!(root.get_enum(&ALIGN, Align::Start), Align::Start);
    }

    #[test]
    fn test_update_listener() {
        let root = root();
        let padding = root.child(&PADDING);
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        padding.set_update_listener(move |node| {
            assert_eq!(node.path().to_string(), "padding");
            seen.set(seen.get() + 1);
        });

        padding.set_value(&TOP, 1).unwrap();
        padding.remove(&TOP);
        padding.remove(&TOP);
        assert_eq!(count.get(), 2);

        padding.clear_update_listener();
        padding.set_value(&TOP, 1).unwrap();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_root_and_paths() {
        let root = root();
        let padding = root.child(&LAYOUT).child(&PADDING);
        assert!(padding.root().ptr_eq(&root));
        assert_eq!(padding.path().to_string(), "layout.padding");
        assert_eq!(padding.attach_key(), Some(&PADDING));
        assert_eq!(padding.parent().and_then(|p| p.attach_key()), Some(&LAYOUT));
    }
}
