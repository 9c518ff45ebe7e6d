// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Only caller mistakes and bootstrap failures are errors here. A missing
//! property or a value stored in an unexpected shape is never reported through
//! this type; those conditions fall through to the default provider chain.

use crate::domain::native_value::HandleKind;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use chartcfg::domain::errors::ConfigError;
///
/// fn set_width(width: f64) -> Result<(), ConfigError> {
///     if width < 0.0 {
///         return Err(ConfigError::negative("borderWidth", width));
///     }
///     Ok(())
/// }
///
/// assert!(set_width(-1.0).is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A property key with an empty or otherwise unusable canonical string was
    /// passed by calling code.
    #[error("Invalid property key: '{key}'")]
    InvalidKey {
        /// The offending key, as given
        key: String,
    },

    /// A value was rejected before being stored.
    #[error("Invalid argument for property '{key}': {message}")]
    InvalidArgument {
        /// The property being written
        key: String,
        /// Why the argument was rejected
        message: String,
    },

    /// A default table could not be loaded from its source.
    #[error("Defaults source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a textual default table.
    #[error("Failed to parse defaults: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading a defaults file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates an `InvalidArgument` error for a negative value written to a
    /// property that only accepts values >= 0.
    pub fn negative(key: impl Into<String>, value: f64) -> Self {
        ConfigError::InvalidArgument {
            key: key.into(),
            message: format!("value {} must be finite and zero or positive", value),
        }
    }

    /// Creates an `InvalidArgument` error for an external handle of the wrong kind.
    pub fn wrong_handle(key: impl Into<String>, expected: HandleKind, actual: HandleKind) -> Self {
        ConfigError::InvalidArgument {
            key: key.into(),
            message: format!("expected {} handle, got {}", expected, actual),
        }
    }

    /// Returns `true` if this error was caused by the caller passing a bad key
    /// or value, as opposed to a bootstrap failure.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            ConfigError::InvalidKey { .. } | ConfigError::InvalidArgument { .. }
        )
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_error() {
        let error = ConfigError::InvalidKey {
            key: String::new(),
        };
        assert_eq!(error.to_string(), "Invalid property key: ''");
        assert!(error.is_caller_error());
    }

    #[test]
    fn test_negative_error() {
        let error = ConfigError::negative("borderWidth", -2.0);
        assert!(matches!(error, ConfigError::InvalidArgument { .. }));
        assert!(error.to_string().contains("borderWidth"));
        assert!(error.to_string().contains("-2"));
    }

    #[test]
    fn test_wrong_handle_error() {
        let error = ConfigError::wrong_handle("pointStyle", HandleKind::Image, HandleKind::Canvas);
        assert_eq!(
            error.to_string(),
            "Invalid argument for property 'pointStyle': expected image handle, got canvas"
        );
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: "Failed to read file".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Defaults source 'yaml-file' error: Failed to read file"
        );
        assert!(!error.is_caller_error());
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "Invalid YAML".to_string(),
            source: None,
        };
        assert_eq!(error.to_string(), "Failed to parse defaults: Invalid YAML");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }
}
