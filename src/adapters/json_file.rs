// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON file document source adapter.

use crate::adapters::file::{canonical_path, default_location, read_config_file};
use crate::domain::{ConfigValue, Document, Result};
use crate::ports::{DocumentParser, DocumentSource};
use std::path::{Path, PathBuf};

const SOURCE_NAME: &str = "json-file";

/// JSON parser implementation.
///
/// # Examples
///
/// ```rust
/// use jsoncfg::adapters::JsonParser;
/// use jsoncfg::domain::{ConfigKey, ConfigValue};
/// use jsoncfg::ports::DocumentParser;
///
/// let doc = JsonParser::new()
///     .parse(r#"{"database": {"host": "localhost", "port": 5432}}"#)
///     .unwrap();
/// assert_eq!(
///     doc.get(&ConfigKey::from("database.port")),
///     Some(&ConfigValue::Integer(5432))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl DocumentParser for JsonParser {
    fn parse(&self, content: &str) -> Result<Document> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Document::from_value(ConfigValue::from(value))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// Document source backed by a JSON file.
///
/// The path is canonicalized once at construction; every [`load`](DocumentSource::load)
/// reads the file again.
///
/// # Examples
///
/// ```rust,no_run
/// use jsoncfg::adapters::JsonFileAdapter;
/// use jsoncfg::ports::DocumentSource;
///
/// let adapter = JsonFileAdapter::from_file("/etc/myapp/config.json").unwrap();
/// let document = adapter.load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileAdapter {
    file_path: PathBuf,
    parser: JsonParser,
}

impl JsonFileAdapter {
    /// Creates an adapter for an existing JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            file_path: canonical_path(SOURCE_NAME, path.as_ref())?,
            parser: JsonParser::new(),
        })
    }

    /// Creates an adapter for `config.json` in the OS-appropriate configuration
    /// directory of the application.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.json")
    }

    /// Like [`from_default_location`](Self::from_default_location) with a custom
    /// file name.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        Self::from_file(default_location(SOURCE_NAME, app_name, qualifier, filename)?)
    }

    /// Returns the canonical path of the file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl DocumentSource for JsonFileAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn load(&self) -> Result<Document> {
        let content = read_config_file(SOURCE_NAME, &self.file_path)?;
        self.parser.parse(&content)
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.file_path)
    }
}
