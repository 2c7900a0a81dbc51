// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document source trait definition.
//!
//! A `DocumentSource` is anything that can produce a complete configuration
//! document on demand: a JSON file, a YAML file, or an in-memory fixture in
//! tests. The store swaps its live document for whatever a source returns.

use crate::domain::{Document, Result};
use std::path::Path;

/// A trait for document sources.
///
/// Implementations must be `Send + Sync` so that a store shared across threads
/// can hold on to them.
///
/// # Examples
///
/// ```rust
/// use jsoncfg::ports::DocumentSource;
/// use jsoncfg::domain::{Document, Result};
///
/// struct EmptySource;
///
/// impl DocumentSource for EmptySource {
///     fn name(&self) -> &str {
///         "empty"
///     }
///
///     fn load(&self) -> Result<Document> {
///         Ok(Document::new())
///     }
/// }
///
/// assert!(EmptySource.load().unwrap().is_empty());
/// ```
pub trait DocumentSource: Send + Sync {
    /// Returns a short name used in logs and error messages, e.g. `"json-file"`.
    fn name(&self) -> &str;

    /// Reads and parses the whole document.
    ///
    /// Every call reads the underlying storage again; sources do not cache.
    fn load(&self) -> Result<Document>;

    /// Returns the file this source reads from, if it is file-backed.
    fn path(&self) -> Option<&Path> {
        None
    }
}
