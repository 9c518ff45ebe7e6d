// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the fundamental concepts used throughout the library:
//! property keys, the values a native map can hold, the shared object handle,
//! node paths and errors. It is independent of how trees are resolved.

pub mod errors;
pub mod native_object;
pub mod native_value;
pub mod node_path;
pub mod property_key;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use native_object::NativeObject;
pub use native_value::{
    CallbackMarker, ExternalHandle, FromNative, HandleKind, NativeValue, ObjectType,
};
pub use node_path::NodePath;
pub use property_key::{PropertyEnum, PropertyKey};
