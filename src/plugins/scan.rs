//! Plugin directory listing.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// One immediate subdirectory of the plugins directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDir {
    /// Directory name.
    pub name: String,
    /// Full path to the directory.
    pub path: PathBuf,
    /// Manifest inside the directory, if present.
    pub manifest: Option<PathBuf>,
}

/// List plugin directories under `dir`, sorted by name.
///
/// Only immediate subdirectories count; plain files are ignored and
/// nested directories are not descended into.
pub fn scan_plugins(dir: &Path, manifest_name: &str) -> Result<Vec<PluginDir>> {
    let mut plugins = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            tracing::debug!("Ignoring non-directory {}", path.display());
            continue;
        }

        let manifest_path = path.join(manifest_name);
        let manifest = manifest_path.is_file().then_some(manifest_path);

        plugins.push(PluginDir {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            manifest,
        });
    }

    plugins.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(plugins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_directories_sorted() {
        let temp = TempDir::new().unwrap();
        for name in ["zeta", "alpha", "mid"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }

        let names: Vec<String> = scan_plugins(temp.path(), "requirements.txt")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn files_are_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("example_node.py.example"), "").unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();

        let plugins = scan_plugins(temp.path(), "requirements.txt").unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name, "real");
    }

    #[test]
    fn manifest_is_detected() {
        let temp = TempDir::new().unwrap();
        let with = temp.path().join("with");
        fs::create_dir(&with).unwrap();
        fs::write(with.join("requirements.txt"), "numpy\n").unwrap();
        fs::create_dir(temp.path().join("without")).unwrap();

        let plugins = scan_plugins(temp.path(), "requirements.txt").unwrap();
        assert_eq!(plugins[0].manifest, Some(with.join("requirements.txt")));
        assert_eq!(plugins[1].manifest, None);
    }

    #[test]
    fn nested_manifest_is_not_found() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("outer").join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("requirements.txt"), "").unwrap();

        let plugins = scan_plugins(temp.path(), "requirements.txt").unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].manifest, None);
    }

    #[test]
    fn directory_named_like_manifest_is_not_a_manifest() {
        let temp = TempDir::new().unwrap();
        let plugin = temp.path().join("odd");
        fs::create_dir_all(plugin.join("requirements.txt")).unwrap();

        let plugins = scan_plugins(temp.path(), "requirements.txt").unwrap();
        assert_eq!(plugins[0].manifest, None);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(scan_plugins(&temp.path().join("absent"), "requirements.txt").is_err());
    }
}
