// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory configuration document.
//!
//! A [`Document`] is a tree of [`ConfigValue`] nodes rooted at a table. Keys are
//! resolved in two steps: an exact top-level match wins, otherwise a dotted key
//! is walked segment by segment through nested documents (and, for numeric
//! segments, sequences).

use crate::domain::config_value::Table;
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use serde::{Deserialize, Serialize};

/// A configuration document.
///
/// # Examples
///
/// ```
/// use jsoncfg::domain::{ConfigKey, ConfigValue, Document};
///
/// let mut doc = Document::new();
/// doc.set(&ConfigKey::from("database.port"), ConfigValue::from(5432));
///
/// assert_eq!(
///     doc.get(&ConfigKey::from("database.port")),
///     Some(&ConfigValue::Integer(5432))
/// );
/// assert!(doc.get(&ConfigKey::from("database")).unwrap().as_document().is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Table,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from a parsed value.
    ///
    /// The root must be a nested document. A `null` root (an empty YAML file,
    /// or the JSON literal `null`) yields an empty document.
    pub fn from_value(value: ConfigValue) -> Result<Self> {
        match value {
            ConfigValue::Document(root) => Ok(Self { root }),
            ConfigValue::Null => Ok(Self::new()),
            other => Err(ConfigError::ParseError {
                message: format!("Document root must be a mapping, found {}", other.kind()),
                source: None,
            }),
        }
    }

    /// Returns the top-level table.
    pub fn as_table(&self) -> &Table {
        &self.root
    }

    /// Converts the document into a single `ConfigValue::Document`.
    pub fn into_value(self) -> ConfigValue {
        ConfigValue::Document(self.root)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns `true` if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Looks up `key`.
    pub fn get(&self, key: &ConfigKey) -> Option<&ConfigValue> {
        if let Some(value) = self.root.get(key.as_str()) {
            return Some(value);
        }
        if !key.is_dotted() {
            return None;
        }

        let mut segments = key.segments();
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                ConfigValue::Document(table) => table.get(segment)?,
                ConfigValue::Sequence(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Returns `true` if `key` resolves to a value.
    pub fn contains(&self, key: &ConfigKey) -> bool {
        self.get(key).is_some()
    }

    /// Inserts or overwrites `key`.
    ///
    /// An existing top-level entry with the exact key is overwritten in place.
    /// Otherwise the dotted path is created, replacing any intermediate node
    /// that cannot hold children.
    pub fn set(&mut self, key: &ConfigKey, value: ConfigValue) {
        if let Some(slot) = self.root.get_mut(key.as_str()) {
            *slot = value;
            return;
        }

        let segments: Vec<&str> = key.segments().collect();
        match segments.split_first() {
            Some((head, rest)) if !rest.is_empty() => {
                let slot = self.root.entry((*head).to_string()).or_default();
                insert_path(slot, rest, value);
            }
            _ => {
                self.root.insert(key.as_str().to_string(), value);
            }
        }
    }

    /// Removes `key`, returning the value that was stored there.
    pub fn remove(&mut self, key: &ConfigKey) -> Option<ConfigValue> {
        if let Some(value) = self.root.remove(key.as_str()) {
            return Some(value);
        }
        if !key.is_dotted() {
            return None;
        }

        let segments: Vec<&str> = key.segments().collect();
        let (head, rest) = segments.split_first()?;
        remove_path(self.root.get_mut(*head)?, rest)
    }

    /// Lists every leaf as a flattened dotted key.
    ///
    /// Sequence elements get their index as a segment. Empty nested documents
    /// and empty sequences are reported as leaves so that no entry is hidden.
    pub fn keys(&self) -> Vec<ConfigKey> {
        let mut keys = Vec::new();
        for (name, value) in &self.root {
            flatten(value, ConfigKey::from(name.as_str()), &mut keys);
        }
        keys
    }
}

impl From<Table> for Document {
    fn from(root: Table) -> Self {
        Self { root }
    }
}

fn insert_path(slot: &mut ConfigValue, segments: &[&str], value: ConfigValue) {
    let Some((head, rest)) = segments.split_first() else {
        *slot = value;
        return;
    };

    match (slot, head.parse::<usize>().ok()) {
        (ConfigValue::Sequence(items), Some(index)) if index < items.len() => {
            insert_path(&mut items[index], rest, value);
        }
        (ConfigValue::Document(table), _) => {
            insert_path(table.entry((*head).to_string()).or_default(), rest, value);
        }
        (other, _) => {
            *other = ConfigValue::Document(Table::new());
            insert_path(other, segments, value);
        }
    }
}

fn remove_path(slot: &mut ConfigValue, segments: &[&str]) -> Option<ConfigValue> {
    let (head, rest) = segments.split_first()?;
    match slot {
        ConfigValue::Document(table) if rest.is_empty() => table.remove(*head),
        ConfigValue::Document(table) => remove_path(table.get_mut(*head)?, rest),
        ConfigValue::Sequence(items) => {
            let index = head.parse::<usize>().ok().filter(|i| *i < items.len())?;
            if rest.is_empty() {
                Some(items.remove(index))
            } else {
                remove_path(&mut items[index], rest)
            }
        }
        _ => None,
    }
}

fn flatten(value: &ConfigValue, key: ConfigKey, out: &mut Vec<ConfigKey>) {
    match value {
        ConfigValue::Document(table) if !table.is_empty() => {
            for (name, child) in table {
                flatten(child, key.child(name), out);
            }
        }
        ConfigValue::Sequence(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten(child, key.child(&index.to_string()), out);
            }
        }
        _ => out.push(key),
    }
}
