//! Checker configuration loading.
//!
//! Configuration is optional: a missing file yields defaults. A file that
//! exists but cannot be read or parsed is an error, not a silent default.

use crate::error::{Result, SessionError};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for the bundled validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// File extensions (without the dot) counted as videos, matched case-insensitively
    pub video_extensions: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            video_extensions: ["mp4", "avi", "mov", "mkv"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl CheckerConfig {
    /// Returns true if `path` has one of the configured video extensions.
    pub fn is_video_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.video_extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

/// Loads the checker configuration, returning defaults if no file is given
/// or the file doesn't exist.
pub fn load_checker_config(path: Option<&Path>) -> Result<CheckerConfig> {
    let Some(path) = path else {
        return Ok(CheckerConfig::default());
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No checker config found, using defaults");
        return Ok(CheckerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| SessionError::io(format!("reading config {}", path.display()), e))?;

    serde_json::from_str(&content).map_err(|e| SessionError::ConfigMalformed {
        path: PathBuf::from(path),
        details: e.to_string(),
    })
}
