// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default provider trait definition.
//!
//! This module defines the `DefaultProvider` trait, one link of the default
//! provider chain consulted when a node's own slot is empty.

use crate::domain::{NativeValue, NodePath, PropertyKey};

/// Priority of per-instance overrides.
pub const PRIORITY_LOCAL: u8 = 3;
/// Priority of chart-type or dataset-type default tables.
pub const PRIORITY_CATEGORY: u8 = 2;
/// Priority of the application-wide default table.
pub const PRIORITY_GLOBAL: u8 = 1;

/// A source of default values.
///
/// # Priority
///
/// Each provider has a priority value (0-255) that determines the order in
/// which providers are queried. Higher values are consulted first:
///
/// - **3 (highest)**: Per-instance overrides
/// - **2**: Chart-type or dataset-type defaults
/// - **1 (lowest)**: Global defaults
///
/// The hardcoded literal baked into each accessor always comes last.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::{NativeValue, NodePath, PropertyKey};
/// use chartcfg::ports::DefaultProvider;
///
/// struct ZeroPadding;
///
/// impl DefaultProvider for ZeroPadding {
///     fn name(&self) -> &str {
///         "zero-padding"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn resolve(&self, path: &NodePath, _key: &PropertyKey) -> Option<NativeValue> {
///         if path.to_string() == "padding" {
///             Some(NativeValue::from(0))
///         } else {
///             None
///         }
///     }
/// }
///
/// let provider = ZeroPadding;
/// let top = PropertyKey::new("TOP", "top");
/// let padding = PropertyKey::new("PADDING", "padding");
/// assert!(provider.resolve(&NodePath::root().child(&padding), &top).is_some());
/// ```
pub trait DefaultProvider {
    /// Returns the name of this provider, used for logging and debugging.
    fn name(&self) -> &str;

    /// Returns the priority of this provider.
    fn priority(&self) -> u8;

    /// Returns the default for `key` on the node at `path`, or `None` if this
    /// provider has no opinion.
    fn resolve(&self, path: &NodePath, key: &PropertyKey) -> Option<NativeValue>;
}
