// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the seams of
//! the configuration engine: the host map it reads and writes, the default
//! providers it falls back to, and the parsers that bootstrap default tables.
//! These traits are implemented by adapters in the adapters layer.

pub mod native_map;
pub mod parser;
pub mod provider;

// Re-export commonly used types
pub use native_map::NativeMap;
pub use parser::DefaultsParser;
pub use provider::{DefaultProvider, PRIORITY_CATEGORY, PRIORITY_GLOBAL, PRIORITY_LOCAL};
