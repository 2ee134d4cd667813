//! Writes the rendered page to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{ExportConfig, STYLESHEET_FILE};
use crate::error::ExportError;
use crate::render_page;
use crate::styles::PAGE_CSS;

/// Files produced by [`export_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// The HTML document
    pub html_path: PathBuf,
    /// `styles.css`, when styles are external
    pub stylesheet_path: Option<PathBuf>,
    /// Size of the HTML document in bytes
    pub html_bytes: usize,
}

/// Render the page and write it (plus `styles.css` if configured).
pub fn export_page(config: &ExportConfig) -> Result<ExportReport, ExportError> {
    let html_path = config.output.clone();
    let out_dir = html_path.parent().unwrap_or_else(|| Path::new(""));
    if !out_dir.as_os_str().is_empty() {
        fs::create_dir_all(out_dir).map_err(|source| ExportError::Io {
            path: out_dir.to_path_buf(),
            source,
        })?;
    }

    let html = render_page(&config.render_options());
    write(&html_path, &html)?;
    info!("wrote {} ({} bytes)", html_path.display(), html.len());

    let stylesheet_path = if config.external_styles {
        let path = out_dir.join(STYLESHEET_FILE);
        write(&path, PAGE_CSS)?;
        info!("wrote {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(ExportReport {
        html_path,
        stylesheet_path,
        html_bytes: html.len(),
    })
}

fn write(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_html_and_creates_parents() {
        let dir = TempDir::new().unwrap();
        let config = ExportConfig {
            output: dir.path().join("site/nested/index.html"),
            ..Default::default()
        };

        let report = export_page(&config).unwrap();

        let written = fs::read_to_string(&report.html_path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert_eq!(report.html_bytes, written.len());
        assert_eq!(report.stylesheet_path, None);
        assert!(!dir.path().join("site/nested").join(STYLESHEET_FILE).exists());
    }

    #[test]
    fn external_styles_write_css_next_to_page() {
        let dir = TempDir::new().unwrap();
        let config = ExportConfig {
            output: dir.path().join("index.html"),
            external_styles: true,
            ..Default::default()
        };

        let report = export_page(&config).unwrap();

        let css_path = report.stylesheet_path.unwrap();
        assert_eq!(css_path, dir.path().join(STYLESHEET_FILE));
        assert_eq!(fs::read_to_string(css_path).unwrap(), PAGE_CSS);
        let html = fs::read_to_string(report.html_path).unwrap();
        assert!(html.contains(r#"href="styles.css""#));
    }

    #[test]
    fn unwritable_target_reports_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a dir").unwrap();
        let config = ExportConfig {
            output: blocker.join("index.html"),
            ..Default::default()
        };

        let err = export_page(&config).unwrap_err();
        assert!(matches!(err, ExportError::Io { ref path, .. } if path == &blocker));
    }
}
