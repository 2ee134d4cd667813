//! Configuration file support for the static export.
//!
//! Loads optional `manz.toml` from the working directory:
//!
//! ```toml
//! [export]
//! output = "dist/index.html"
//! title = "Manz — News & Insights"
//! external_styles = false
//! ```
//!
//! Nothing here reaches the page content; the article list is fixed at build
//! time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ExportError;
use crate::{DEFAULT_TITLE, RenderOptions, Stylesheet};

/// Config file looked up by [`ManzConfig::discover`].
pub const CONFIG_FILE: &str = "manz.toml";

/// Stylesheet file name used with `external_styles`.
pub const STYLESHEET_FILE: &str = "styles.css";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManzConfig {
    /// `[export]` settings
    pub export: ExportConfig,
}

/// `[export]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// HTML file to write; parent directories are created
    pub output: PathBuf,
    /// Document `<title>`
    pub title: String,
    /// Write `styles.css` next to the page and link it instead of inlining
    pub external_styles: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist/index.html"),
            title: DEFAULT_TITLE.to_string(),
            external_styles: false,
        }
    }
}

impl ExportConfig {
    /// Render settings for this export.
    pub fn render_options(&self) -> RenderOptions {
        let stylesheet = if self.external_styles {
            Stylesheet::Linked(STYLESHEET_FILE.to_string())
        } else {
            Stylesheet::Inline
        };
        RenderOptions {
            title: self.title.clone(),
            stylesheet,
        }
    }
}

impl ManzConfig {
    /// Load `manz.toml` from `dir`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn discover(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; falling back to defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Missing or malformed files are errors.
    pub fn load_from_path(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ExportError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
