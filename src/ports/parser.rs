// SPDX-License-Identifier: MIT OR Apache-2.0

//! Defaults parser trait definition.
//!
//! This module defines the `DefaultsParser` trait, which provides an interface for
//! turning a textual default table (YAML, JSON, ...) into a nested native object.

use crate::domain::{NativeObject, Result};

/// A trait for parsing default tables.
///
/// # Structure
///
/// Default tables share the key space of the nodes that consult them. A YAML
/// document like:
///
/// ```yaml
/// layout:
///   padding:
///     top: 4
/// ```
///
/// parses into an object whose `layout` slot holds an object whose `padding`
/// slot holds `{top: 4}`, which is exactly where a padding node at path
/// `layout.padding` looks for its `top` default.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::{NativeObject, NativeValue, Result};
/// use chartcfg::ports::DefaultsParser;
///
/// struct FixedParser;
///
/// impl DefaultsParser for FixedParser {
///     fn parse(&self, _content: &str) -> Result<NativeObject> {
///         Ok(NativeObject::from_entries([("responsive", true)]))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["fixed"]
///     }
/// }
///
/// let table = FixedParser.parse("").unwrap();
/// assert_eq!(table.get("responsive"), Some(NativeValue::from(true)));
/// ```
pub trait DefaultsParser {
    /// Parses `content` into a nested native object.
    ///
    /// # Returns
    ///
    /// * `Ok(NativeObject)` - The parsed table
    /// * `Err(ConfigError)` - The content is malformed or its root is not a map
    fn parse(&self, content: &str) -> Result<NativeObject>;

    /// Returns the file extensions supported by this parser, without the
    /// leading dot.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NativeValue;

    struct TestParser;

    impl DefaultsParser for TestParser {
        fn parse(&self, _content: &str) -> Result<NativeObject> {
            let font = NativeObject::from_entries([("size", 12)]);
            let root = NativeObject::new();
            root.set("font", NativeValue::Object(font));
            Ok(root)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse_nested() {
        let table = TestParser.parse("dummy content").unwrap();
        let font = table.get("font").and_then(|v| v.as_object().cloned()).unwrap();
        assert_eq!(font.get("size"), Some(NativeValue::from(12)));
    }

    #[test]
    fn test_parser_supported_extensions() {
        let extensions = TestParser.supported_extensions();
        assert_eq!(extensions, &["test", "tst"]);
    }
}
