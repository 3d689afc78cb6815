//! Settings schema.
//!
//! Maps the optional YAML settings file. Every key has a default that
//! describes a stock ComfyUI checkout, so an empty file (or no file at all)
//! is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::shell::default_python;

/// Root settings structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Files that must all exist for a directory to count as the app root.
    pub root_markers: Vec<String>,

    /// Virtual environment locations relative to the app root, in priority order.
    pub venv_candidates: Vec<PathBuf>,

    /// Where a new virtual environment is created, relative to the app root.
    pub new_venv_dir: PathBuf,

    /// Plugins directory, relative to the app root.
    pub plugins_dir: PathBuf,

    /// Per-plugin dependency manifest filename.
    pub manifest: String,

    /// Base interpreter for creating environments and running pip.
    pub python: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_markers: default_root_markers(),
            venv_candidates: default_venv_candidates(),
            new_venv_dir: PathBuf::from("venv"),
            plugins_dir: PathBuf::from("custom_nodes"),
            manifest: "requirements.txt".to_string(),
            python: default_python().to_string(),
        }
    }
}

fn default_root_markers() -> Vec<String> {
    vec!["main.py".to_string(), "folder_paths.py".to_string()]
}

fn default_venv_candidates() -> Vec<PathBuf> {
    ["venv", ".venv", "env", "../venv", "../.venv"]
        .iter()
        .map(PathBuf::from)
        .collect()
}
