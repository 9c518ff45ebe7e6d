// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML default table adapter.
//!
//! This module provides a parser that turns YAML documents into nested native
//! objects, and a loader that reads default tables from YAML files.

use crate::adapters::DefaultTable;
use crate::domain::{ConfigError, NativeObject, NativeValue, Result};
use crate::ports::DefaultsParser;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML default tables (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name looked up in the OS configuration directory.
const DEFAULT_FILE_NAME: &str = "defaults.yaml";

/// YAML parser implementation.
///
/// Mappings become nested objects, sequences become arrays and scalars keep
/// their type. Mapping entries with non-string keys are skipped.
///
/// # Examples
///
/// ```rust
/// use chartcfg::adapters::YamlParser;
/// use chartcfg::domain::NativeValue;
/// use chartcfg::ports::DefaultsParser;
///
/// let parser = YamlParser::new();
/// let table = parser.parse("padding:\n  top: 4\n  left: 2").unwrap();
/// let padding = table.get("padding").and_then(|v| v.as_object().cloned()).unwrap();
/// assert_eq!(padding.get("top"), Some(NativeValue::from(4)));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML value into a native value.
    fn convert(value: serde_yaml::Value) -> NativeValue {
        match value {
            serde_yaml::Value::Null => NativeValue::Null,
            serde_yaml::Value::Bool(b) => NativeValue::Boolean(b),
            serde_yaml::Value::Number(n) => {
                n.as_f64().map_or(NativeValue::Null, NativeValue::Number)
            }
            serde_yaml::Value::String(s) => NativeValue::String(s),
            serde_yaml::Value::Sequence(seq) => {
                NativeValue::Array(seq.into_iter().map(Self::convert).collect())
            }
            serde_yaml::Value::Mapping(map) => {
                let object = NativeObject::new();
                for (key, val) in map {
                    if let Some(key_str) = key.as_str() {
                        object.set(key_str, Self::convert(val));
                    }
                }
                NativeValue::Object(object)
            }
            serde_yaml::Value::Tagged(tagged) => Self::convert(tagged.value),
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultsParser for YamlParser {
    fn parse(&self, content: &str) -> Result<NativeObject> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match Self::convert(value) {
            NativeValue::Object(object) => Ok(object),
            NativeValue::Null => Ok(NativeObject::new()),
            _ => Err(ConfigError::ParseError {
                message: "The root of a defaults document must be a map".to_string(),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Loads a default table from a YAML file.
///
/// The loaded table is a shared object: [`reload`](YamlDefaultsLoader::reload)
/// replaces its contents in place, so chains built from
/// [`global_table`](YamlDefaultsLoader::global_table) or
/// [`category_table`](YamlDefaultsLoader::category_table) see the new values.
///
/// # Examples
///
/// ```rust,no_run
/// use chartcfg::adapters::YamlDefaultsLoader;
///
/// // Load from a specific file
/// let loader = YamlDefaultsLoader::from_file("/path/to/defaults.yaml").unwrap();
/// let global = loader.global_table();
///
/// // Load from default OS location
/// let loader = YamlDefaultsLoader::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlDefaultsLoader {
    /// Path to the YAML file
    file_path: PathBuf,
    /// Parsed default table
    table: NativeObject,
    /// YAML parser
    parser: YamlParser,
}

impl YamlDefaultsLoader {
    /// Loads a default table from a specific file path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let parser = YamlParser::new();

        // Canonicalize path to prevent directory traversal attacks
        let canonical_path = file_path.canonicalize().map_err(|e| ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!("Invalid or inaccessible path: {}", display_name(&file_path)),
            source: Some(Box::new(e)),
        })?;

        let content = read_bounded(&canonical_path)?;
        let table = parser.parse(&content)?;
        tracing::debug!(
            "Loaded {} top-level defaults from '{}'",
            table.len(),
            display_name(&canonical_path)
        );

        Ok(Self {
            file_path: canonical_path,
            table,
            parser,
        })
    }

    /// Loads `defaults.yaml` from the default OS-appropriate configuration
    /// directory, as determined by the `directories` crate.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Loads a custom file name from the default OS-appropriate location.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path to the defaults file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the loaded table.
    pub fn table(&self) -> &NativeObject {
        &self.table
    }

    /// Wraps the loaded table as the application-wide defaults.
    pub fn global_table(&self) -> DefaultTable {
        DefaultTable::global(self.table.clone())
    }

    /// Wraps the loaded table as the defaults of one chart or dataset type.
    pub fn category_table(&self, type_id: &str) -> DefaultTable {
        DefaultTable::category(type_id, self.table.clone())
    }

    /// Re-reads the file and replaces the table contents in place.
    pub fn reload(&mut self) -> Result<()> {
        let content = read_bounded(&self.file_path)?;
        let fresh = self.parser.parse(&content)?;

        for key in self.table.keys() {
            self.table.remove(&key);
        }
        self.table.deep_merge(&fresh, true);
        tracing::debug!("Reloaded defaults from '{}'", display_name(&self.file_path));
        Ok(())
    }
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

/// Reads a file after checking it against the size limit.
fn read_bounded(path: &Path) -> Result<String> {
    // Check file size before reading to prevent DoS via large files
    let metadata = fs::metadata(path).map_err(|e| ConfigError::SourceError {
        source_name: "yaml-file".to_string(),
        message: format!("Failed to read file metadata: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_YAML_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!(
                "Defaults file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_YAML_FILE_SIZE
            ),
            source: None,
        });
    }

    fs::read_to_string(path).map_err(|e| ConfigError::SourceError {
        source_name: "yaml-file".to_string(),
        message: format!("Failed to read defaults file: {}", display_name(path)),
        source: Some(Box::new(e)),
    })
}
