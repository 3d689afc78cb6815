//! Requirements installation for every plugin.
//!
//! Each plugin directory with a manifest gets one install invocation in the
//! activated environment. A failing plugin is reported and the pass moves
//! on to the next one; only a plugins directory that cannot be created or
//! listed stops the run.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::package::PackageManager;
use crate::ui::UserInterface;
use crate::venv::ProcessEnv;

use super::report::{InstallReport, PluginOutcome, PluginStatus};
use super::scan::{scan_plugins, PluginDir};

/// Installs plugin requirements through a [`PackageManager`].
pub struct RequirementsInstaller<'a> {
    package_manager: &'a dyn PackageManager,
    manifest_name: &'a str,
}

impl<'a> RequirementsInstaller<'a> {
    /// Create an installer that looks for `manifest_name` in each plugin.
    pub fn new(package_manager: &'a dyn PackageManager, manifest_name: &'a str) -> Self {
        Self {
            package_manager,
            manifest_name,
        }
    }

    /// Install requirements for every plugin under `plugins_dir`.
    pub fn install_all(
        &self,
        plugins_dir: &Path,
        env: &ProcessEnv,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallReport> {
        if !plugins_dir.is_dir() {
            ui.warning(&format!(
                "Plugins directory not found. Creating it at {}",
                plugins_dir.display()
            ));
            fs::create_dir_all(plugins_dir)?;
            return Ok(InstallReport::new(plugins_dir, true));
        }

        let plugins = scan_plugins(plugins_dir, self.manifest_name)?;
        tracing::debug!(
            "Found {} plugin directories in {}",
            plugins.len(),
            plugins_dir.display()
        );

        let mut report = InstallReport::new(plugins_dir, false);
        for plugin in plugins {
            let status = match &plugin.manifest {
                Some(manifest) => self.install_one(&plugin, manifest, env, ui),
                None => {
                    if ui.output_mode().shows_details() {
                        ui.message(&format!(
                            "No {} found for {}, skipping",
                            self.manifest_name, plugin.name
                        ));
                    }
                    PluginStatus::Skipped
                }
            };

            report.push(PluginOutcome {
                name: plugin.name,
                manifest: plugin.manifest,
                status,
            });
        }

        Ok(report)
    }

    fn install_one(
        &self,
        plugin: &PluginDir,
        manifest: &Path,
        env: &ProcessEnv,
        ui: &mut dyn UserInterface,
    ) -> PluginStatus {
        let mut spinner = ui.start_spinner(&format!("Installing requirements for {}", plugin.name));

        match self.package_manager.install_manifest(manifest, env) {
            Ok(result) if result.success => {
                spinner.finish_success(&format!("Installed requirements for {}", plugin.name));
                ui.show_output_block(&plugin.name, &result.stdout);
                PluginStatus::Installed {
                    stdout: result.stdout,
                }
            }
            Ok(result) => {
                spinner.finish_error(&format!(
                    "Error installing requirements for {}",
                    plugin.name
                ));
                ui.show_output_block(&plugin.name, &result.stderr);
                ui.error(&format!(
                    "Error installing requirements for {} (exit code {})",
                    plugin.name,
                    result
                        .exit_code
                        .map_or_else(|| "unknown".to_string(), |c| c.to_string())
                ));
                PluginStatus::Failed {
                    exit_code: result.exit_code,
                    stderr: result.stderr,
                }
            }
            Err(e) => {
                spinner.finish_error(&format!(
                    "Error installing requirements for {}",
                    plugin.name
                ));
                ui.error(&format!(
                    "Error installing requirements for {}: {}",
                    plugin.name, e
                ));
                PluginStatus::Failed {
                    exit_code: None,
                    stderr: e.to_string(),
                }
            }
        }
    }
}
