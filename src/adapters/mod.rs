// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains the in-memory native map, the default table providers
//! and the parsers that bootstrap default tables from YAML or JSON.

pub mod default_table;
pub mod json;
pub mod memory_map;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
pub use default_table::{DefaultTable, FnProvider};
pub use json::{to_json, to_json_pretty, JsonParser};
pub use memory_map::MemoryMap;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlDefaultsLoader, YamlParser};
