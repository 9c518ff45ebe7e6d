// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property families and reusable mixins built on the engine.
//!
//! Each resolver is a small `(key, literal)` value. Node types compose the
//! resolvers they need rather than inheriting accessors, and every resolver
//! works on any [`ConfigNode`](crate::service::ConfigNode).

pub mod border_radius;
pub mod border_skipped;
pub mod color;
pub mod font;
pub mod padding;
pub mod point_style;

pub use border_radius::{corner_keys, BorderRadius, BorderRadiusResolver, Corner, Corners};
pub use border_skipped::{BorderSkip, BorderSkippedResolver, Edge};
pub use color::{ColorResolver, ColorValue};
pub use font::{font_keys, Font, FontResolver, FontStyle, FontWeight, LineHeight, WeightKeyword};
pub use padding::{padding_keys, Padding, PaddingResolver, Side};
pub use point_style::{PointStyle, PointStyleResolver, PointStyleValue};
