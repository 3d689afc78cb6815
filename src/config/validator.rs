//! Settings validation.

use crate::config::schema::Settings;
use crate::error::{NodeprepError, Result};

/// Validate settings, returning the first problem found.
pub fn validate(settings: &Settings) -> Result<()> {
    if settings.root_markers.is_empty() {
        return Err(invalid("root_markers must list at least one file"));
    }
    if settings.root_markers.iter().any(|m| m.trim().is_empty()) {
        return Err(invalid("root_markers must not contain empty names"));
    }
    if settings.venv_candidates.is_empty() {
        return Err(invalid("venv_candidates must list at least one path"));
    }
    if settings.new_venv_dir.as_os_str().is_empty() {
        return Err(invalid("new_venv_dir must not be empty"));
    }
    if settings.plugins_dir.as_os_str().is_empty() {
        return Err(invalid("plugins_dir must not be empty"));
    }
    if settings.manifest.trim().is_empty() {
        return Err(invalid("manifest must not be empty"));
    }
    if settings.python.trim().is_empty() {
        return Err(invalid("python must not be empty"));
    }
    Ok(())
}

fn invalid(message: &str) -> NodeprepError {
    NodeprepError::ConfigValidation {
        message: message.to_string(),
    }
}
