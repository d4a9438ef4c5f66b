//! Explicit inputs for one generation run.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use eyre::{Result, WrapErr};

/// Everything a generation run reads besides the binding set itself.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Template files to render, in render order.
    pub templates: Vec<PathBuf>,
    /// Timestamp stamped into generated headers.
    pub timestamp: DateTime<Local>,
    /// Host binary the manifest was queried from, for status output.
    pub host: String,
}

impl GenerationContext {
    /// Discover templates in the fixed template directory and stamp the
    /// context with the current time.
    pub fn discover(template_dir: &Path, host: impl Into<String>) -> Result<Self> {
        Ok(Self {
            templates: discover_templates(template_dir)?,
            timestamp: Local::now(),
            host: host.into(),
        })
    }

    /// Formatted timestamp handed to templates as `date`.
    pub fn date(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// List the renderable template files in a directory: regular `.rs` files,
/// dotfiles skipped, sorted by name so render order is deterministic.
fn discover_templates(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read template directory {}", dir.display()))?;

    let mut templates = Vec::new();
    for entry in entries {
        let entry = entry
            .wrap_err_with(|| format!("failed to read template directory {}", dir.display()))?;
        let path = entry.path();
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_none_or(|name| name.starts_with('.'));
        if hidden || !path.is_file() {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == "rs") {
            templates.push(path);
        }
    }
    templates.sort();
    Ok(templates)
}
