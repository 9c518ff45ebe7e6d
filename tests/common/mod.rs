// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for the integration tests.

use chartcfg::domain::{NativeValue, NodePath, PropertyKey};
use chartcfg::ports::{DefaultProvider, PRIORITY_CATEGORY, PRIORITY_GLOBAL, PRIORITY_LOCAL};
use std::cell::Cell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;
use tempfile::NamedTempFile;

/// A default provider backed by a map, counting how often it is asked.
///
/// Values are keyed by the dotted node path and the property name.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct MockProvider {
    name: String,
    priority: u8,
    values: HashMap<(String, String), NativeValue>,
    calls: Rc<Cell<usize>>,
}

#[allow(dead_code)]
impl MockProvider {
    pub fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            priority,
            values: HashMap::new(),
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Adds a default for `key` on the root node.
    pub fn with_value(self, key: &str, value: impl Into<NativeValue>) -> Self {
        self.with_value_at("", key, value)
    }

    /// Adds a default for `key` on the node at the dotted `path`.
    pub fn with_value_at(mut self, path: &str, key: &str, value: impl Into<NativeValue>) -> Self {
        self.values
            .insert((path.to_string(), key.to_string()), value.into());
        self
    }

    /// Returns the `resolve` call counter, shared with clones.
    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl DefaultProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn resolve(&self, path: &NodePath, key: &PropertyKey) -> Option<NativeValue> {
        self.calls.set(self.calls.get() + 1);
        self.values
            .get(&(path.to_string(), key.value().to_string()))
            .cloned()
    }
}

/// Creates a temporary YAML file with the given content.
///
/// The file is deleted when the returned handle is dropped.
#[allow(dead_code)]
pub fn create_temp_yaml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Creates global, category and override providers that all define `color`.
///
/// Each level also defines one property the others leave out.
#[allow(dead_code)]
pub fn create_precedence_providers() -> (MockProvider, MockProvider, MockProvider) {
    let global = MockProvider::new("global", PRIORITY_GLOBAL)
        .with_value("color", "#666")
        .with_value("borderWidth", 1)
        .with_value_at("elements.bar", "borderRadius", 2);

    let category = MockProvider::new("category:bar", PRIORITY_CATEGORY)
        .with_value("color", "#36a2eb")
        .with_value_at("elements.bar", "borderSkipped", "bottom");

    let overrides = MockProvider::new("hover", PRIORITY_LOCAL)
        .with_value("color", "#ff6384")
        .with_value("hoverRadius", 6);

    (global, category, overrides)
}
