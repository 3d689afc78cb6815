//! Settings loading.
//!
//! Settings come from three layers, later overriding earlier:
//! 1. Built-in defaults
//! 2. The YAML file named by `--config` / `NODEPREP_CONFIG`
//! 3. The `--python` flag / `NODEPREP_PYTHON`

use crate::config::schema::Settings;
use crate::config::validator::validate;
use crate::error::{NodeprepError, Result};
use std::fs;
use std::path::Path;

/// Command-line overrides applied on top of the settings file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Base interpreter override.
    pub python: Option<String>,
}

/// Parse settings from YAML text.
pub fn parse_settings(content: &str, path: &Path) -> Result<Settings> {
    // An empty document deserializes as null, not as an empty mapping.
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| NodeprepError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParse` if the YAML is invalid.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(NodeprepError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_settings(&content, path)
}

/// Resolve the effective settings for a run and validate them.
pub fn load_settings(config: Option<&Path>, overrides: &SettingsOverrides) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => {
            tracing::debug!("Loading settings from {}", path.display());
            load_settings_file(path)?
        }
        None => Settings::default(),
    };

    if let Some(python) = &overrides.python {
        settings.python = python.clone();
    }

    validate(&settings)?;
    Ok(settings)
}
