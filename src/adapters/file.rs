// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for file-backed document sources.

use crate::domain::{ConfigError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for a configuration file (10MB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

/// Resolves `path` to its canonical form.
///
/// Fails if the file does not exist or cannot be accessed.
pub(crate) fn canonical_path(source_name: &str, path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|e| {
        ConfigError::source_error(
            source_name,
            format!("Invalid or inaccessible path: {}", display_name(path)),
            Some(Box::new(e)),
        )
    })
}

/// Reads a configuration file into memory after checking its size.
pub(crate) fn read_config_file(source_name: &str, path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| {
        ConfigError::source_error(
            source_name,
            format!("Failed to read file metadata: {}", display_name(path)),
            Some(Box::new(e)),
        )
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::source_error(
            source_name,
            format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            None,
        ));
    }

    fs::read_to_string(path).map_err(|e| {
        ConfigError::source_error(
            source_name,
            format!("Failed to read configuration file: {}", display_name(path)),
            Some(Box::new(e)),
        )
    })
}

/// Returns `<os config dir for app>/<filename>`.
pub(crate) fn default_location(
    source_name: &str,
    app_name: &str,
    qualifier: &str,
    filename: &str,
) -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
        ConfigError::source_error(source_name, "Failed to determine project directories", None)
    })?;
    Ok(proj_dirs.config_dir().join(filename))
}
