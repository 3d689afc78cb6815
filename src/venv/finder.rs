//! Virtual environment discovery and creation.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::config::Settings;
use crate::error::{NodeprepError, Result};
use crate::package::PackageManager;
use crate::ui::{Prompt, UserInterface};

use super::layout::VenvLayout;

/// Prompt key for the environment path.
pub const VENV_PATH_PROMPT_KEY: &str = "venv_path";

/// How the environment was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VenvOrigin {
    /// Found among the candidate locations.
    Discovered,
    /// Typed in by the user.
    UserSupplied,
    /// Created by this run.
    Created,
}

/// A virtual environment chosen for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundVenv {
    /// Environment root.
    pub path: PathBuf,
    /// How it was obtained.
    pub origin: VenvOrigin,
}

/// Join `relative` onto `root`, folding `..` and `.` lexically.
///
/// `../venv` next to `/srv/ComfyUI` becomes `/srv/venv` rather than
/// `/srv/ComfyUI/../venv`. A `..` is only folded into a named component,
/// so relative roots such as `.` or `..` keep climbing. Absolute
/// candidates are returned unchanged.
pub fn resolve_candidate(root: &Path, relative: &Path) -> PathBuf {
    if relative.is_absolute() {
        return relative.to_path_buf();
    }

    let mut resolved: PathBuf = root
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    for component in relative.components() {
        match component {
            Component::ParentDir => match resolved.components().next_back() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                // Empty, or already climbing out of a relative root.
                _ => resolved.push(".."),
            },
            Component::CurDir => {}
            other => resolved.push(other.as_os_str()),
        }
    }
    if resolved.as_os_str().is_empty() {
        resolved.push(".");
    }
    resolved
}

/// Candidate environment paths for `root`, in priority order.
pub fn candidate_paths(root: &Path, candidates: &[PathBuf]) -> Vec<PathBuf> {
    candidates
        .iter()
        .map(|c| resolve_candidate(root, c))
        .collect()
}

/// First candidate holding the activation marker.
pub fn find_existing(candidates: &[PathBuf], layout: VenvLayout) -> Option<PathBuf> {
    candidates.iter().find(|c| layout.is_venv(c)).cloned()
}

/// Finds, asks for, or creates the virtual environment.
pub struct VenvFinder<'a> {
    settings: &'a Settings,
    layout: VenvLayout,
}

impl<'a> VenvFinder<'a> {
    /// Create a finder.
    pub fn new(settings: &'a Settings, layout: VenvLayout) -> Self {
        Self { settings, layout }
    }

    /// Find the environment for `root`.
    ///
    /// Candidates are tried in order; when none match the user is asked
    /// once. An empty answer creates a new environment, anything else must
    /// already be an environment.
    pub fn find(
        &self,
        root: &Path,
        ui: &mut dyn UserInterface,
        package_manager: &dyn PackageManager,
    ) -> Result<FoundVenv> {
        let candidates = candidate_paths(root, &self.settings.venv_candidates);
        for candidate in &candidates {
            tracing::debug!("Checking for virtual environment at {}", candidate.display());
        }

        if let Some(path) = find_existing(&candidates, self.layout) {
            tracing::info!("Found virtual environment at {}", path.display());
            return Ok(FoundVenv {
                path,
                origin: VenvOrigin::Discovered,
            });
        }

        ui.warning("Virtual environment not automatically detected.");
        let prompt = Prompt::new(
            VENV_PATH_PROMPT_KEY,
            "Please enter the full path to your virtual environment directory \
             (or press Enter to create a new one)",
        );
        let answer = ui.prompt(&prompt)?;
        let answer = answer.trim();

        if answer.is_empty() {
            let path = resolve_candidate(root, &self.settings.new_venv_dir);
            self.create(&path, ui, package_manager)?;
            return Ok(FoundVenv {
                path,
                origin: VenvOrigin::Created,
            });
        }

        let path = PathBuf::from(answer);
        if self.layout.is_venv(&path) {
            return Ok(FoundVenv {
                path,
                origin: VenvOrigin::UserSupplied,
            });
        }

        Err(NodeprepError::InvalidVenv {
            path,
            marker: self.layout.activation_marker().display().to_string(),
        })
    }

    fn create(
        &self,
        path: &Path,
        ui: &mut dyn UserInterface,
        package_manager: &dyn PackageManager,
    ) -> Result<()> {
        let mut spinner =
            ui.start_spinner(&format!("Creating a new virtual environment at {}", path.display()));

        let result = match package_manager.create_environment(path) {
            Ok(result) => result,
            Err(e) => {
                spinner.finish_error("Error creating virtual environment");
                return Err(NodeprepError::VenvCreationFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };

        if !result.success {
            spinner.finish_error("Error creating virtual environment");
            let detail = result.stderr.trim();
            let message = if detail.is_empty() {
                format!("exit code {:?}", result.exit_code)
            } else {
                detail.to_string()
            };
            return Err(NodeprepError::VenvCreationFailed {
                path: path.to_path_buf(),
                message,
            });
        }

        spinner.finish_success("Virtual environment created successfully");
        Ok(())
    }
}
