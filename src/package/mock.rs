//! Recording package manager for tests.
//!
//! # Example
//!
//! ```
//! use nodeprep::package::{MockPackageManager, PackageManager};
//! use nodeprep::venv::ProcessEnv;
//! use std::path::Path;
//!
//! let pm = MockPackageManager::new();
//! pm.fail_install_for("broken-node");
//!
//! let env = ProcessEnv::new(vec![]);
//! let ok = pm
//!     .install_manifest(Path::new("/app/custom_nodes/good/requirements.txt"), &env)
//!     .unwrap();
//! let bad = pm
//!     .install_manifest(Path::new("/app/custom_nodes/broken-node/requirements.txt"), &env)
//!     .unwrap();
//!
//! assert!(ok.success);
//! assert!(!bad.success);
//! assert_eq!(pm.installs().len(), 2);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NodeprepError, Result};
use crate::shell::CommandResult;
use crate::venv::{ProcessEnv, VenvLayout};

use super::PackageManager;

/// An install call as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInstall {
    /// Manifest passed to `install_manifest`.
    pub manifest: PathBuf,
    /// Active environment at the time of the call.
    pub virtual_env: Option<PathBuf>,
}

/// Package manager that records calls instead of running anything.
///
/// Created environments get a real activation marker on disk (unless
/// disabled) so activation can be exercised end to end.
#[derive(Debug)]
pub struct MockPackageManager {
    layout: VenvLayout,
    creations: RefCell<Vec<PathBuf>>,
    installs: RefCell<Vec<RecordedInstall>>,
    failing_plugins: RefCell<HashSet<String>>,
    unspawnable_plugins: RefCell<HashSet<String>>,
    creation_fails: Cell<bool>,
    write_marker: Cell<bool>,
}

impl Default for MockPackageManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPackageManager {
    /// Create a mock that succeeds at everything.
    pub fn new() -> Self {
        Self::with_layout(VenvLayout::current())
    }

    /// Create a mock that writes markers for `layout`.
    pub fn with_layout(layout: VenvLayout) -> Self {
        Self {
            layout,
            creations: RefCell::new(Vec::new()),
            installs: RefCell::new(Vec::new()),
            failing_plugins: RefCell::new(HashSet::new()),
            unspawnable_plugins: RefCell::new(HashSet::new()),
            creation_fails: Cell::new(false),
            write_marker: Cell::new(true),
        }
    }

    /// Make installs for the plugin directory `name` exit nonzero.
    pub fn fail_install_for(&self, name: &str) {
        self.failing_plugins.borrow_mut().insert(name.to_string());
    }

    /// Make installs for the plugin directory `name` fail to start.
    pub fn fail_spawn_for(&self, name: &str) {
        self.unspawnable_plugins
            .borrow_mut()
            .insert(name.to_string());
    }

    /// Make environment creation exit nonzero.
    pub fn fail_creation(&self) {
        self.creation_fails.set(true);
    }

    /// Create environments without writing the activation marker.
    pub fn skip_marker_on_creation(&self) {
        self.write_marker.set(false);
    }

    /// Paths passed to `create_environment`.
    pub fn creations(&self) -> Vec<PathBuf> {
        self.creations.borrow().clone()
    }

    /// Calls made to `install_manifest`, in order.
    pub fn installs(&self) -> Vec<RecordedInstall> {
        self.installs.borrow().clone()
    }

    /// Manifests passed to `install_manifest`, in order.
    pub fn installed_manifests(&self) -> Vec<PathBuf> {
        self.installs
            .borrow()
            .iter()
            .map(|i| i.manifest.clone())
            .collect()
    }

    fn plugin_name(manifest: &Path) -> String {
        manifest
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl PackageManager for MockPackageManager {
    fn create_environment(&self, path: &Path) -> Result<CommandResult> {
        self.creations.borrow_mut().push(path.to_path_buf());

        if self.creation_fails.get() {
            return Ok(CommandResult::failure(
                Some(1),
                String::new(),
                "Error: venv module unavailable".to_string(),
            ));
        }

        if self.write_marker.get() {
            let marker = self.layout.marker_path(path);
            if let Some(parent) = marker.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&marker, "")?;
        }

        Ok(CommandResult::success(String::new(), String::new()))
    }

    fn install_manifest(&self, manifest: &Path, env: &ProcessEnv) -> Result<CommandResult> {
        let name = Self::plugin_name(manifest);

        if self.unspawnable_plugins.borrow().contains(&name) {
            return Err(NodeprepError::CommandFailed {
                command: format!("pip install -r {}", manifest.display()),
                code: None,
            });
        }

        self.installs.borrow_mut().push(RecordedInstall {
            manifest: manifest.to_path_buf(),
            virtual_env: env.virtual_env().map(Path::to_path_buf),
        });

        if self.failing_plugins.borrow().contains(&name) {
            return Ok(CommandResult::failure(
                Some(1),
                String::new(),
                format!("ERROR: could not install requirements for {}", name),
            ));
        }

        Ok(CommandResult::success(
            format!("Successfully installed requirements for {}", name),
            String::new(),
        ))
    }
}
