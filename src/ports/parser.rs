// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, which turns the raw text of
//! a configuration file into a [`Document`].

use crate::domain::{Document, Result};

/// A trait for parsing configuration files.
///
/// Parsers keep the nesting of the input. Flattening into dotted keys happens
/// on lookup, not at parse time, so `database: {port: 5432}` parses into a
/// `database` document holding a `port` entry.
///
/// # Examples
///
/// ```rust
/// use jsoncfg::ports::DocumentParser;
/// use jsoncfg::domain::{ConfigKey, ConfigValue, Document, Result};
///
/// struct KeyEqualsValueParser;
///
/// impl DocumentParser for KeyEqualsValueParser {
///     fn parse(&self, content: &str) -> Result<Document> {
///         let mut doc = Document::new();
///         for line in content.lines() {
///             if let Some((k, v)) = line.split_once('=') {
///                 doc.set(&ConfigKey::from(k.trim()), ConfigValue::from(v.trim()));
///             }
///         }
///         Ok(doc)
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let doc = KeyEqualsValueParser.parse("db.host = localhost").unwrap();
/// assert!(doc.contains(&ConfigKey::from("db.host")));
/// ```
pub trait DocumentParser {
    /// Parses configuration content into a document.
    ///
    /// # Returns
    ///
    /// * `Ok(Document)` - The parsed configuration
    /// * `Err(ConfigError::ParseError)` - The content is malformed or its root is
    ///   not a mapping
    fn parse(&self, content: &str) -> Result<Document>;

    /// Returns the file extensions (without the leading dot) handled by this
    /// parser.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if `extension` is handled by this parser, ignoring case.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
