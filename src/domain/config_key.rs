// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype.
//!
//! A `ConfigKey` is the address of a value inside a [`Document`](super::Document).
//! Keys are plain strings; a `.` separates path segments when the key is resolved
//! against nested documents.

use std::fmt;

/// Separator between path segments of a dotted key.
pub const KEY_SEPARATOR: char = '.';

/// A type-safe wrapper for configuration keys.
///
/// The key is kept verbatim. Whether `"database.port"` names a top-level entry
/// called `database.port` or the `port` entry of the `database` document is
/// decided at lookup time by the document, which tries the verbatim key first.
///
/// # Examples
///
/// ```
/// use jsoncfg::domain::ConfigKey;
///
/// let key = ConfigKey::from("database.port");
/// assert_eq!(key.as_str(), "database.port");
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["database", "port"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the key contains at least one separator.
    pub fn is_dotted(&self) -> bool {
        self.0.contains(KEY_SEPARATOR)
    }

    /// Iterates over the dot-separated segments of the key.
    ///
    /// A key without separators yields itself once. Empty segments are kept so
    /// that `"a..b"` can never alias `"a.b"`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(KEY_SEPARATOR)
    }

    /// Appends a segment, producing the key of a child entry.
    ///
    /// ```
    /// use jsoncfg::domain::ConfigKey;
    ///
    /// let root = ConfigKey::from("");
    /// let child = root.child("database").child("host");
    /// assert_eq!(child.as_str(), "database.host");
    /// ```
    pub fn child(&self, segment: &str) -> Self {
        if self.0.is_empty() {
            ConfigKey(segment.to_string())
        } else {
            ConfigKey(format!("{}{}{}", self.0, KEY_SEPARATOR, segment))
        }
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<&ConfigKey> for ConfigKey {
    fn from(key: &ConfigKey) -> Self {
        key.clone()
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
