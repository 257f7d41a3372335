//! Location of the searched document.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line flags (which also read `DOCX_SEARCH_DIR` / `DOCX_SEARCH_FILE`).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default directory holding the document, relative to the working directory.
pub const DEFAULT_DOCUMENT_DIR: &str = "src/documents";

/// Default document file name.
pub const DEFAULT_DOCUMENT_NAME: &str = "[AIVIN] - BRD.docx";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory containing the document. A leading `~` expands to the home directory.
    pub document_dir: String,
    /// File name of the document inside `document_dir`.
    pub document_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_dir: DEFAULT_DOCUMENT_DIR.to_string(),
            document_name: DEFAULT_DOCUMENT_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn new(document_dir: impl Into<String>, document_name: impl Into<String>) -> Self {
        Self {
            document_dir: document_dir.into(),
            document_name: document_name.into(),
        }
    }

    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Replace any setting for which an override is given.
    #[must_use]
    pub fn with_overrides(mut self, document_dir: Option<String>, document_name: Option<String>) -> Self {
        if let Some(dir) = document_dir {
            self.document_dir = dir;
        }
        if let Some(name) = document_name {
            self.document_name = name;
        }
        self
    }

    /// Directory containing the document, with `~` expanded.
    pub fn document_dir(&self) -> PathBuf {
        resolve_home(&self.document_dir)
    }

    /// Full path of the document.
    pub fn document_path(&self) -> PathBuf {
        self.document_dir().join(&self.document_name)
    }
}

/// Resolve a leading `~` against the home directory.
///
/// `~user` forms are not supported and stay literal, as does everything when
/// no home directory is known.
fn resolve_home(dir: &str) -> PathBuf {
    let rest = match dir.strip_prefix('~') {
        Some("") => "",
        Some(rest) => match rest.strip_prefix('/') {
            Some(rest) => rest,
            None => return PathBuf::from(dir),
        },
        None => return PathBuf::from(dir),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(dir),
    }
}
