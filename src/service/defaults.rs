// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of default tables.
//!
//! The registry owns the application-wide default table and one table per
//! chart or dataset type, and builds the fixed provider chain handed to each
//! new configuration tree.

use crate::adapters::DefaultTable;
use crate::domain::NativeObject;
use crate::ports::DefaultProvider;
use crate::service::chain::{DefaultProviderChain, DefaultProviderChainBuilder};
use std::collections::HashMap;
use std::rc::Rc;

/// Global and per-category default tables.
///
/// Tables are shared handles, so a theme merged into a registered table is
/// visible to every chain built before or after the change.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::{NativeObject, NativeValue, NodePath, PropertyKey};
/// use chartcfg::service::DefaultsRegistry;
///
/// const BORDER_WIDTH: PropertyKey = PropertyKey::new("BORDER_WIDTH", "borderWidth");
///
/// let mut registry = DefaultsRegistry::new();
/// registry.global().set(&NodePath::root(), &BORDER_WIDTH, NativeValue::from(1)).unwrap();
/// registry.register_category("bar", NativeObject::from_entries([("borderWidth", 2)]));
///
/// let bar = registry.chain(Some("bar"));
/// let line = registry.chain(Some("line"));
/// assert_eq!(bar.resolve(&NodePath::root(), &BORDER_WIDTH), Some(NativeValue::from(2)));
/// assert_eq!(line.resolve(&NodePath::root(), &BORDER_WIDTH), Some(NativeValue::from(1)));
/// ```
#[derive(Clone, Debug)]
pub struct DefaultsRegistry {
    global: DefaultTable,
    categories: HashMap<String, DefaultTable>,
}

impl DefaultsRegistry {
    /// Creates a registry with an empty global table.
    pub fn new() -> Self {
        Self::with_global(NativeObject::new())
    }

    /// Creates a registry around an existing global table.
    pub fn with_global(root: NativeObject) -> Self {
        Self {
            global: DefaultTable::global(root),
            categories: HashMap::new(),
        }
    }

    /// Creates a registry whose global table is read from `defaults.yaml` in
    /// the default OS-appropriate location.
    ///
    /// If the file doesn't exist or cannot be parsed, the global table starts
    /// empty.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    #[cfg(feature = "yaml")]
    pub fn with_defaults(app_name: &str, qualifier: &str) -> Self {
        use crate::adapters::YamlDefaultsLoader;
        match YamlDefaultsLoader::from_default_location(app_name, qualifier) {
            Ok(loader) => Self::with_global(loader.table().clone()),
            Err(e) => {
                tracing::debug!("No defaults file loaded, using empty global table: {}", e);
                Self::new()
            }
        }
    }

    /// Returns the global table.
    pub fn global(&self) -> &DefaultTable {
        &self.global
    }

    /// Registers the defaults of one chart or dataset type, replacing any
    /// previous table for that type.
    pub fn register_category(&mut self, type_id: &str, root: NativeObject) -> DefaultTable {
        let table = DefaultTable::category(type_id, root);
        if self
            .categories
            .insert(type_id.to_string(), table.clone())
            .is_some()
        {
            tracing::debug!("Replaced defaults table for category '{}'", type_id);
        }
        table
    }

    /// Returns the table of a registered category.
    pub fn category(&self, type_id: &str) -> Option<&DefaultTable> {
        self.categories.get(type_id)
    }

    /// Returns the registered category ids, sorted.
    pub fn category_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Builds the chain for a new tree: category table (if any) then global.
    ///
    /// An unknown category is not an error; the chain just skips that level.
    pub fn chain(&self, category: Option<&str>) -> Rc<DefaultProviderChain> {
        Rc::new(self.builder_for(category).build())
    }

    /// Builds the chain for a new tree with per-instance overrides consulted
    /// first.
    pub fn chain_with_overrides(
        &self,
        category: Option<&str>,
        overrides: Box<dyn DefaultProvider>,
    ) -> Rc<DefaultProviderChain> {
        Rc::new(self.builder_for(category).with_provider(overrides).build())
    }

    fn builder_for(&self, category: Option<&str>) -> DefaultProviderChainBuilder {
        let mut builder = DefaultProviderChain::builder().with_table(self.global.clone());
        if let Some(type_id) = category {
            match self.categories.get(type_id) {
                Some(table) => builder = builder.with_table(table.clone()),
                None => tracing::trace!("No defaults registered for category '{}'", type_id),
            }
        }
        builder
    }
}

impl Default for DefaultsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NativeValue, NodePath, PropertyKey};

    const RADIUS: PropertyKey = PropertyKey::new("RADIUS", "radius");

    fn registry() -> DefaultsRegistry {
        let mut registry = DefaultsRegistry::with_global(NativeObject::from_entries([("radius", 3)]));
        registry.register_category("bubble", NativeObject::from_entries([("radius", 10)]));
        registry
    }

    #[test]
    fn test_chain_without_category() {
        let chain = registry().chain(None);
        assert_eq!(chain.provider_names(), vec!["global"]);
        assert_eq!(chain.resolve(&NodePath::root(), &RADIUS), Some(NativeValue::from(3)));
    }

    #[test]
    fn test_chain_with_category() {
        let chain = registry().chain(Some("bubble"));
        assert_eq!(chain.provider_names(), vec!["category:bubble", "global"]);
        assert_eq!(chain.resolve(&NodePath::root(), &RADIUS), Some(NativeValue::from(10)));
    }

    #[test]
    fn test_unknown_category_falls_back_to_global() {
        let chain = registry().chain(Some("radar"));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.resolve(&NodePath::root(), &RADIUS), Some(NativeValue::from(3)));
    }

    #[test]
    fn test_overrides_come_first() {
        let overrides = DefaultTable::overrides(NativeObject::from_entries([("radius", 1)]));
        let chain = registry().chain_with_overrides(Some("bubble"), Box::new(overrides));
        assert_eq!(
            chain.provider_names(),
            vec!["overrides", "category:bubble", "global"]
        );
        assert_eq!(chain.resolve(&NodePath::root(), &RADIUS), Some(NativeValue::from(1)));
    }

    #[test]
    fn test_register_replaces_category() {
        let mut registry = registry();
        registry.register_category("bubble", NativeObject::from_entries([("radius", 20)]));
        assert_eq!(registry.category_ids(), vec!["bubble"]);
        let chain = registry.chain(Some("bubble"));
        assert_eq!(chain.resolve(&NodePath::root(), &RADIUS), Some(NativeValue::from(20)));
    }

    #[test]
    fn test_theme_visible_to_existing_chain() {
        let registry = registry();
        let chain = registry.chain(None);
        registry.global().merge(&NativeObject::from_entries([("radius", 5)]));
        assert_eq!(chain.resolve(&NodePath::root(), &RADIUS), Some(NativeValue::from(5)));
    }
}
