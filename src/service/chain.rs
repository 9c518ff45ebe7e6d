// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered fallback sequence of default providers.
//!
//! A [`DefaultProviderChain`] is consulted whenever a node's own slot is empty.
//! Providers are queried from the highest priority to the lowest and the first
//! usable value wins. The accessor's built-in literal terminates every lookup,
//! so [`resolve_or`](DefaultProviderChain::resolve_or) never signals absence.

use crate::adapters::DefaultTable;
use crate::domain::{NativeValue, NodePath, PropertyKey};
use crate::ports::DefaultProvider;
use std::fmt;

/// An immutable, priority-ordered list of default providers.
///
/// # Examples
///
/// ```rust
/// use chartcfg::adapters::DefaultTable;
/// use chartcfg::domain::{FromNative, NativeObject, NativeValue, NodePath, PropertyKey};
/// use chartcfg::service::DefaultProviderChain;
///
/// const TOP: PropertyKey = PropertyKey::new("TOP", "top");
///
/// let global = DefaultTable::global(NativeObject::from_entries([("top", 1)]));
/// let category = DefaultTable::category("bar", NativeObject::from_entries([("top", 2)]));
///
/// let chain = DefaultProviderChain::builder()
///     .with_table(global)
///     .with_table(category)
///     .build();
///
/// // The category table outranks the global one regardless of insertion order
/// assert_eq!(chain.resolve(&NodePath::root(), &TOP), Some(NativeValue::from(2)));
/// assert_eq!(chain.provider_names(), vec!["category:bar", "global"]);
///
/// // The literal terminates the chain
/// const LEFT: PropertyKey = PropertyKey::new("LEFT", "left");
/// assert_eq!(chain.resolve_or(&NodePath::root(), &LEFT, f64::from_native, 7.0), 7.0);
/// ```
pub struct DefaultProviderChain {
    /// Providers, maintained in priority order (highest first)
    providers: Vec<Box<dyn DefaultProvider>>,
}

impl DefaultProviderChain {
    /// Creates a chain with no providers; every lookup ends in the literal.
    pub fn empty() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Creates a new chain builder.
    pub fn builder() -> DefaultProviderChainBuilder {
        DefaultProviderChainBuilder::new()
    }

    /// Returns the first defined value for `key` on the node at `path`.
    pub fn resolve(&self, path: &NodePath, key: &PropertyKey) -> Option<NativeValue> {
        self.providers
            .iter()
            .find_map(|provider| provider.resolve(path, key))
    }

    /// Returns the first provider value that `decode` accepts.
    ///
    /// A value the decoder rejects is skipped and resolution continues with the
    /// next provider.
    pub fn resolve_with<T, F>(&self, path: &NodePath, key: &PropertyKey, decode: F) -> Option<T>
    where
        F: Fn(&NativeValue) -> Option<T>,
    {
        for provider in &self.providers {
            let Some(value) = provider.resolve(path, key) else {
                continue;
            };
            match decode(&value) {
                Some(decoded) => return Some(decoded),
                None => {
                    tracing::trace!(
                        "Skipping undecodable default {:?} for '{}' at '{}' from provider '{}'",
                        value.object_type(),
                        key,
                        path,
                        provider.name()
                    );
                }
            }
        }
        None
    }

    /// Resolves through every provider, ending in `literal`.
    pub fn resolve_or<T, F>(&self, path: &NodePath, key: &PropertyKey, decode: F, literal: T) -> T
    where
        F: Fn(&NativeValue) -> Option<T>,
    {
        self.resolve_with(path, key, decode).unwrap_or_else(|| {
            tracing::trace!("No provider default for '{}' at '{}', using literal", key, path);
            literal
        })
    }

    /// Returns the number of providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns the provider names in lookup order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

impl Default for DefaultProviderChain {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for DefaultProviderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultProviderChain")
            .field("providers", &self.provider_names())
            .finish()
    }
}

/// Builder for constructing a [`DefaultProviderChain`].
///
/// The chain is fixed once built; providers are sorted by priority, keeping
/// insertion order among equal priorities.
pub struct DefaultProviderChainBuilder {
    providers: Vec<Box<dyn DefaultProvider>>,
}

impl DefaultProviderChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Adds a provider to the builder.
    pub fn with_provider(mut self, provider: Box<dyn DefaultProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Adds a default table to the builder.
    pub fn with_table(self, table: DefaultTable) -> Self {
        self.with_provider(Box::new(table))
    }

    /// Builds the chain.
    pub fn build(mut self) -> DefaultProviderChain {
        // Stable sort, so equal priorities keep insertion order
        self.providers
            .sort_by_key(|p| std::cmp::Reverse(p.priority()));
        tracing::debug!(
            "Built default provider chain with {} providers",
            self.providers.len()
        );
        DefaultProviderChain {
            providers: self.providers,
        }
    }
}

impl Default for DefaultProviderChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FnProvider;
    use crate::domain::{FromNative, NativeObject};
    use crate::ports::{PRIORITY_CATEGORY, PRIORITY_GLOBAL, PRIORITY_LOCAL};
    use std::cell::Cell;
    use std::rc::Rc;

    const TOP: PropertyKey = PropertyKey::new("TOP", "top");

    // Mock provider for testing
    struct MockProvider {
        name: String,
        priority: u8,
        value: Option<NativeValue>,
        calls: Rc<Cell<usize>>,
    }

    impl MockProvider {
        fn new(name: &str, priority: u8, value: Option<NativeValue>) -> Self {
            Self {
                name: name.to_string(),
                priority,
                value,
                calls: Rc::new(Cell::new(0)),
            }
        }
    }

    impl DefaultProvider for MockProvider {
        fn name(&self) -> &str {
            &self.name
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        fn resolve(&self, _path: &NodePath, _key: &PropertyKey) -> Option<NativeValue> {
            self.calls.set(self.calls.get() + 1);
            self.value.clone()
        }
    }

    #[test]
    fn test_empty_chain() {
        let chain = DefaultProviderChain::empty();
        assert!(chain.is_empty());
        assert_eq!(chain.resolve(&NodePath::root(), &TOP), None);
        assert_eq!(chain.resolve_or(&NodePath::root(), &TOP, f64::from_native, 3.0), 3.0);
    }

    #[test]
    fn test_priority_order() {
        let chain = DefaultProviderChain::builder()
            .with_provider(Box::new(MockProvider::new(
                "global",
                PRIORITY_GLOBAL,
                Some(NativeValue::from(1)),
            )))
            .with_provider(Box::new(MockProvider::new(
                "local",
                PRIORITY_LOCAL,
                Some(NativeValue::from(3)),
            )))
            .with_provider(Box::new(MockProvider::new(
                "category",
                PRIORITY_CATEGORY,
                Some(NativeValue::from(2)),
            )))
            .build();

        assert_eq!(chain.provider_names(), vec!["local", "category", "global"]);
        assert_eq!(chain.resolve(&NodePath::root(), &TOP), Some(NativeValue::from(3)));
    }

    #[test]
    fn test_equal_priority_keeps_insertion_order() {
        let chain = DefaultProviderChain::builder()
            .with_provider(Box::new(MockProvider::new("first", 1, None)))
            .with_provider(Box::new(MockProvider::new("second", 1, None)))
            .build();
        assert_eq!(chain.provider_names(), vec!["first", "second"]);
    }

    #[test]
    fn test_stops_at_first_defined() {
        let low = MockProvider::new("low", PRIORITY_GLOBAL, Some(NativeValue::from(1)));
        let low_calls = Rc::clone(&low.calls);
        let chain = DefaultProviderChain::builder()
            .with_provider(Box::new(MockProvider::new(
                "high",
                PRIORITY_LOCAL,
                Some(NativeValue::from(9)),
            )))
            .with_provider(Box::new(low))
            .build();

        assert_eq!(chain.resolve(&NodePath::root(), &TOP), Some(NativeValue::from(9)));
        assert_eq!(low_calls.get(), 0);
    }

    #[test]
    fn test_resolve_with_skips_undecodable() {
        let chain = DefaultProviderChain::builder()
            .with_provider(Box::new(MockProvider::new(
                "local",
                PRIORITY_LOCAL,
                Some(NativeValue::from("not a number")),
            )))
            .with_provider(Box::new(MockProvider::new(
                "global",
                PRIORITY_GLOBAL,
                Some(NativeValue::from(4)),
            )))
            .build();

        assert_eq!(
            chain.resolve_with(&NodePath::root(), &TOP, f64::from_native),
            Some(4.0)
        );
        assert_eq!(
            chain.resolve_with(&NodePath::root(), &TOP, String::from_native),
            Some("not a number".to_string())
        );
    }

    #[test]
    fn test_literal_when_all_absent() {
        let chain = DefaultProviderChain::builder()
            .with_provider(Box::new(MockProvider::new("a", 3, None)))
            .with_provider(Box::new(MockProvider::new("b", 2, None)))
            .with_provider(Box::new(MockProvider::new("c", 1, None)))
            .build();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.resolve_or(&NodePath::root(), &TOP, i32::from_native, 42), 42);
    }

    #[test]
    fn test_tables_and_closures() {
        let table = DefaultTable::global(NativeObject::from_entries([("top", 1)]));
        let computed = FnProvider::new("computed", PRIORITY_LOCAL, |path: &NodePath, _: &PropertyKey| {
            (!path.is_root()).then(|| NativeValue::from(10))
        });
        let chain = DefaultProviderChain::builder()
            .with_table(table)
            .with_provider(Box::new(computed))
            .build();

        let padding = PropertyKey::new("PADDING", "padding");
        assert_eq!(chain.resolve(&NodePath::root(), &TOP), Some(NativeValue::from(1)));
        assert_eq!(
            chain.resolve(&NodePath::root().child(&padding), &TOP),
            Some(NativeValue::from(10))
        );
    }

    #[test]
    fn test_theme_changes_visible() {
        let table = DefaultTable::global(NativeObject::new());
        let chain = DefaultProviderChain::builder().with_table(table.clone()).build();
        assert_eq!(chain.resolve(&NodePath::root(), &TOP), None);

        table.set(&NodePath::root(), &TOP, NativeValue::from(8)).unwrap();
        assert_eq!(chain.resolve(&NodePath::root(), &TOP), Some(NativeValue::from(8)));
    }
}
