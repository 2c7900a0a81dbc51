// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration store.
//!
//! Every fallible operation in the crate reports a [`ConfigError`]. The
//! "never fail" surfaces (`ConfigStore::get`, `ConfigStore::load`) are built on
//! top of the fallible ones and swallow these errors deliberately.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when loading,
/// parsing, or converting configuration values. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use jsoncfg::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::ConfigKeyNotFound {
///         key: "database.host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested configuration key is not present in the document.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// A value exists but cannot be converted to the requested type.
    #[error("Failed to convert configuration value for key '{key}' to type {target_type}: {message}")]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// What the stored value actually was
        message: String,
    },

    /// An error occurred in a document source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading or writing configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `TypeConversionError` for `T` at `key`.
    pub fn conversion<T: ?Sized>(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::TypeConversionError {
            key: key.into(),
            target_type: std::any::type_name::<T>().to_string(),
            message: message.into(),
        }
    }

    /// Creates a `SourceError` for the named source.
    pub fn source_error(
        source_name: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ConfigError::SourceError {
            source_name: source_name.into(),
            message: message.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_not_found_error() {
        let error = ConfigError::ConfigKeyNotFound {
            key: "test.key".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: test.key");
    }

    #[test]
    fn test_conversion_error_names_type() {
        let error = ConfigError::conversion::<i32>("test.key", "found a string");
        let msg = error.to_string();
        assert!(msg.contains("test.key"));
        assert!(msg.contains("i32"));
        assert!(msg.contains("found a string"));
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::source_error("json-file", "Failed to read file", None);
        assert_eq!(
            error.to_string(),
            "Configuration source 'json-file' error: Failed to read file"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "Invalid JSON".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid JSON"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let error = ConfigError::from(json_err);
        assert!(matches!(error, ConfigError::ParseError { source: Some(_), .. }));
        assert!(error.to_string().contains("JSON"));
    }
}
