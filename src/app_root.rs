//! Application root discovery.
//!
//! The root is the first of these that holds every marker file:
//!
//! 1. The directory the tool runs from
//! 2. Its parent
//! 3. A path the user types in, checked once
//!
//! A typed path that fails the check ends the run; there is no retry.

use std::path::{Path, PathBuf};

use crate::error::{NodeprepError, Result};
use crate::ui::{Prompt, UserInterface};

/// Prompt key for the application root.
pub const APP_ROOT_PROMPT_KEY: &str = "app_root";

/// Finds and validates the application root.
#[derive(Debug, Clone)]
pub struct AppRootLocator<'a> {
    markers: &'a [String],
}

impl<'a> AppRootLocator<'a> {
    /// Create a locator that requires every file in `markers`.
    pub fn new(markers: &'a [String]) -> Self {
        Self { markers }
    }

    /// Whether `dir` contains every marker file.
    pub fn is_app_root(&self, dir: &Path) -> bool {
        self.markers.iter().all(|marker| dir.join(marker).exists())
    }

    /// Locate the application root starting from `start`.
    pub fn locate(&self, start: &Path, ui: &mut dyn UserInterface) -> Result<PathBuf> {
        if self.is_app_root(start) {
            tracing::debug!("Application root found at start directory {}", start.display());
            return Ok(start.to_path_buf());
        }

        if let Some(parent) = start.parent() {
            if self.is_app_root(parent) {
                tracing::debug!("Application root found at parent {}", parent.display());
                return Ok(parent.to_path_buf());
            }
        }

        tracing::debug!("No application root near {}", start.display());
        ui.warning("Application directory not automatically detected.");

        let prompt = Prompt::new(
            APP_ROOT_PROMPT_KEY,
            "Please enter the full path to your application directory",
        );
        let answer = ui.prompt(&prompt)?;
        let candidate = PathBuf::from(answer.trim());

        if !candidate.as_os_str().is_empty() && self.is_app_root(&candidate) {
            return Ok(candidate);
        }

        Err(NodeprepError::InvalidAppRoot {
            path: candidate,
            markers: self.markers.join(", "),
        })
    }
}
