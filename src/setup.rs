//! The setup pipeline.
//!
//! Runs the four stages in order, each feeding the next:
//! locate the application root, find or create the virtual environment,
//! activate it, then install every plugin's requirements inside it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::app_root::AppRootLocator;
use crate::config::Settings;
use crate::error::Result;
use crate::package::PackageManager;
use crate::plugins::{InstallReport, RequirementsInstaller};
use crate::ui::UserInterface;
use crate::venv::{activate, FoundVenv, ProcessEnv, VenvFinder, VenvLayout, VenvOrigin};

/// Everything a completed run resolved and did.
#[derive(Debug, Clone, Serialize)]
pub struct SetupOutcome {
    /// Validated application root.
    pub app_root: PathBuf,
    /// The environment that was activated.
    pub venv: FoundVenv,
    /// Per-plugin install results.
    pub report: InstallReport,
}

/// Drives one setup run.
pub struct SetupRunner<'a> {
    settings: &'a Settings,
    layout: VenvLayout,
}

impl<'a> SetupRunner<'a> {
    /// Create a runner for the given settings and platform layout.
    pub fn new(settings: &'a Settings, layout: VenvLayout) -> Self {
        Self { settings, layout }
    }

    /// Locate and validate the application root.
    pub fn locate_root(&self, start: &Path, ui: &mut dyn UserInterface) -> Result<PathBuf> {
        let root = AppRootLocator::new(&self.settings.root_markers).locate(start, ui)?;
        ui.success(&format!("Application directory: {}", root.display()));
        Ok(root)
    }

    /// The plugins directory for `root`.
    pub fn plugins_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.settings.plugins_dir)
    }

    /// Run all stages.
    ///
    /// `env` is activated in place; callers can keep using it to spawn
    /// further processes inside the environment.
    pub fn run(
        &self,
        start: &Path,
        ui: &mut dyn UserInterface,
        package_manager: &dyn PackageManager,
        env: &mut ProcessEnv,
    ) -> Result<SetupOutcome> {
        let app_root = self.locate_root(start, ui)?;

        let venv = VenvFinder::new(self.settings, self.layout).find(&app_root, ui, package_manager)?;
        match venv.origin {
            VenvOrigin::Created => {}
            VenvOrigin::Discovered | VenvOrigin::UserSupplied => {
                ui.success(&format!("Virtual environment: {}", venv.path.display()));
            }
        }

        activate(env, &venv.path, self.layout)?;
        ui.success("Virtual environment activated");

        let plugins_dir = self.plugins_dir(&app_root);
        let report = RequirementsInstaller::new(package_manager, &self.settings.manifest)
            .install_all(&plugins_dir, env, ui)?;

        Ok(SetupOutcome {
            app_root,
            venv,
            report,
        })
    }
}
