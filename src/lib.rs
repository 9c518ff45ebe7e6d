// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture engine for chart option trees.
//!
//! This crate resolves chart options stored in a host-owned map: every read
//! looks at the local value first, then walks a prioritized chain of default
//! providers, and finally returns a built-in literal. Child nodes are created
//! lazily and installed into their parent on the first write, so reading never
//! mutates the host state.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`PropertyKey`, `NativeValue`, `NativeObject`, errors)
//! - **Ports**: Trait definitions that define interfaces (`NativeMap`, `DefaultProvider`)
//! - **Adapters**: Implementations for specific backends (in-memory map, default tables, YAML)
//! - **Service**: Nodes, the default chain, and the polymorphic decoder
//! - **Resolvers**: Reusable property families (colors, border radius, padding, fonts)
//!
//! # Features
//!
//! - **Lazy attachment**: Reading a missing sub-node creates nothing
//! - **Default chain**: Local, chart type, then global defaults with a typed literal at the end
//! - **Polymorphic values**: One slot may hold a string, a number, a map, a handle or a callback
//! - **Scalar or array**: Per-element values are read back uniformly as lists
//!
//! # Feature Flags
//!
//! - `yaml`: Enable loading default tables from YAML files (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use chartcfg::prelude::*;
//! use chartcfg::domain::NativeObject;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let registry = DefaultsRegistry::with_global(NativeObject::from_entries([("color", "#333")]));
//! let options = ChartOptions::from_registry(&registry, "bar");
//!
//! assert_eq!(options.get_color(), "#333");
//! options.bar().set_border_radius(6.0)?;
//! assert_eq!(options.to_json()?, r#"{"elements":{"bar":{"borderRadius":6}}}"#);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod options;
pub mod ports;
pub mod resolvers;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{DefaultTable, MemoryMap};
    pub use crate::domain::{
        ConfigError, NativeObject, NativeValue, PropertyEnum, PropertyKey, Result,
    };
    pub use crate::options::ChartOptions;
    pub use crate::ports::{DefaultProvider, NativeMap};
    pub use crate::service::{
        ConfigNode, DefaultProviderChain, DefaultsRegistry, Polymorphic, PolymorphicValue,
    };

    // Re-export adapters based on feature flags
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlDefaultsLoader, YamlParser};
}
