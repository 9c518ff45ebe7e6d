// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resolution engine.
//!
//! This module contains the default provider chain, the registry that builds
//! chains from default tables, the configuration node with its lazy
//! attachment, and the shape-aware decoding built on top of the node.

pub mod chain;
pub mod decoder;
pub mod defaults;
pub mod node;
pub mod unifier;

// Re-export commonly used types
pub use chain::{DefaultProviderChain, DefaultProviderChainBuilder};
pub use decoder::{decode, Polymorphic, PolymorphicValue, Scalar, Shape, DEFAULT_SHAPE_ORDER};
pub use defaults::DefaultsRegistry;
pub use node::{decode_enum, ConfigNode, UpdateListener};
pub use unifier::{decode_list, StoredForm};
