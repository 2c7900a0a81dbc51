// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file document source adapter.

use crate::adapters::file::{canonical_path, default_location, read_config_file};
use crate::domain::config_value::Table;
use crate::domain::{ConfigError, ConfigValue, Document, Result};
use crate::ports::{DocumentParser, DocumentSource};
use std::path::{Path, PathBuf};

const SOURCE_NAME: &str = "yaml-file";

/// YAML parser implementation.
///
/// Mapping keys that are not strings (numbers, booleans) are rendered to their
/// textual form; tagged values are unwrapped.
///
/// # Examples
///
/// ```rust
/// use jsoncfg::adapters::YamlParser;
/// use jsoncfg::domain::{ConfigKey, ConfigValue};
/// use jsoncfg::ports::DocumentParser;
///
/// let doc = YamlParser::new().parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// assert_eq!(
///     doc.get(&ConfigKey::from("database.host")),
///     Some(&ConfigValue::from("localhost"))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn convert(value: serde_yaml::Value) -> ConfigValue {
        match value {
            serde_yaml::Value::Null => ConfigValue::Null,
            serde_yaml::Value::Bool(b) => ConfigValue::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ConfigValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    ConfigValue::Unsigned(u)
                } else {
                    ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yaml::Value::String(s) => ConfigValue::String(s),
            serde_yaml::Value::Sequence(seq) => {
                ConfigValue::Sequence(seq.into_iter().map(Self::convert).collect())
            }
            serde_yaml::Value::Mapping(map) => {
                let mut table = Table::new();
                for (key, val) in map {
                    if let Some(name) = Self::key_name(&key) {
                        table.insert(name, Self::convert(val));
                    }
                }
                ConfigValue::Document(table)
            }
            serde_yaml::Value::Tagged(tagged) => Self::convert(tagged.value),
        }
    }

    fn key_name(key: &serde_yaml::Value) -> Option<String> {
        match key {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Document> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        Document::from_value(Self::convert(value))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Document source backed by a YAML file.
///
/// # Examples
///
/// ```rust,no_run
/// use jsoncfg::adapters::YamlFileAdapter;
///
/// let adapter = YamlFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    file_path: PathBuf,
    parser: YamlParser,
}

impl YamlFileAdapter {
    /// Creates an adapter for an existing YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            file_path: canonical_path(SOURCE_NAME, path.as_ref())?,
            parser: YamlParser::new(),
        })
    }

    /// Creates an adapter for `config.yaml` in the OS-appropriate configuration
    /// directory of the application.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
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

impl DocumentSource for YamlFileAdapter {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigKey;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn get(doc: &Document, key: &str) -> Option<ConfigValue> {
        doc.get(&ConfigKey::from(key)).cloned()
    }

    #[test]
    fn test_yaml_parser_deeply_nested() {
        let yaml = r#"
app:
  database:
    connection:
      host: localhost
      port: 5432
"#;
        let doc = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(
            get(&doc, "app.database.connection.host"),
            Some(ConfigValue::from("localhost"))
        );
        assert_eq!(
            get(&doc, "app.database.connection.port"),
            Some(ConfigValue::Integer(5432))
        );
    }

    #[test]
    fn test_yaml_parser_array() {
        let yaml = "servers:\n  - server1\n  - server2\n";
        let doc = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(get(&doc, "servers.0"), Some(ConfigValue::from("server1")));
        assert_eq!(get(&doc, "servers.1"), Some(ConfigValue::from("server2")));
    }

    #[test]
    fn test_yaml_parser_mixed_types() {
        let yaml = r#"
string_value: hello
number_value: 42
float_value: 0.5
bool_value: true
null_value: null
"#;
        let doc = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(get(&doc, "string_value"), Some(ConfigValue::from("hello")));
        assert_eq!(get(&doc, "number_value"), Some(ConfigValue::Integer(42)));
        assert_eq!(get(&doc, "float_value"), Some(ConfigValue::Float(0.5)));
        assert_eq!(get(&doc, "bool_value"), Some(ConfigValue::Bool(true)));
        assert_eq!(get(&doc, "null_value"), Some(ConfigValue::Null));
    }

    #[test]
    fn test_yaml_parser_large_unsigned_is_exact() {
        let doc = YamlParser::new().parse("id: 18446744073709551615\n").unwrap();
        assert_eq!(get(&doc, "id"), Some(ConfigValue::Unsigned(u64::MAX)));
    }

    #[test]
    fn test_yaml_parser_numeric_keys() {
        let doc = YamlParser::new().parse("ports:\n  80: http\n").unwrap();
        assert_eq!(get(&doc, "ports.80"), Some(ConfigValue::from("http")));
    }

    #[test]
    fn test_yaml_parser_empty_is_empty_document() {
        assert!(YamlParser::new().parse("").unwrap().is_empty());
    }

    #[test]
    fn test_yaml_parser_invalid() {
        assert!(YamlParser::new().parse("invalid: yaml: content:").is_err());
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::new();
        assert!(parser.supports("yaml"));
        assert!(parser.supports("yml"));
        assert!(!parser.supports("json"));
    }

    #[test]
    fn test_yaml_adapter_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "database:\n  host: localhost\n  port: 5432").unwrap();

        let adapter = YamlFileAdapter::from_file(temp_file.path()).unwrap();
        assert_eq!(adapter.name(), "yaml-file");

        let doc = adapter.load().unwrap();
        assert_eq!(get(&doc, "database.host"), Some(ConfigValue::from("localhost")));
    }

    #[test]
    fn test_yaml_adapter_nonexistent_file() {
        assert!(YamlFileAdapter::from_file("/nonexistent/path/to/config.yaml").is_err());
    }
}
