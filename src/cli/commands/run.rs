//! Run command implementation.
//!
//! The `nodeprep run` command performs the full setup: locate the app,
//! prepare its virtual environment and install plugin requirements.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::package::{PackageManager, PipPackageManager};
use crate::plugins::InstallReport;
use crate::setup::{SetupOutcome, SetupRunner};
use crate::ui::UserInterface;
use crate::venv::{ProcessEnv, VenvLayout};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    start_dir: PathBuf,
    settings: Settings,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(start_dir: &Path, settings: Settings, args: RunArgs) -> Self {
        Self {
            start_dir: start_dir.to_path_buf(),
            settings,
            args,
        }
    }

    /// Run the pipeline with an explicit package manager and environment.
    pub fn run_with(
        &self,
        ui: &mut dyn UserInterface,
        package_manager: &dyn PackageManager,
        env: &mut ProcessEnv,
    ) -> Result<SetupOutcome> {
        ui.show_header("nodeprep");
        let runner = SetupRunner::new(&self.settings, VenvLayout::current());
        let outcome = runner.run(&self.start_dir, ui, package_manager, env)?;

        ui.show_install_summary(&outcome.report);
        report_completion(ui, &outcome.report);
        Ok(outcome)
    }
}

fn report_completion(ui: &mut dyn UserInterface, report: &InstallReport) {
    if report.created_plugins_dir {
        ui.message("No plugins installed yet, nothing to do.");
    } else if report.outcomes.is_empty() {
        ui.message(&format!(
            "No plugin directories found in {}",
            report.plugins_dir.display()
        ));
    }

    let failed = report.failed_plugins();
    if !failed.is_empty() {
        ui.warning(&format!(
            "{} plugin(s) failed to install: {}",
            failed.len(),
            failed.join(", ")
        ));
    }

    ui.success("Setup complete!");
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let package_manager = PipPackageManager::new(&self.settings.python);
        let mut env = ProcessEnv::from_current();
        tracing::debug!("Base interpreter: {}", package_manager.python());

        let outcome = self.run_with(ui, &package_manager, &mut env)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&outcome).map_err(anyhow::Error::from)?;
            println!("{}", json);
        }

        Ok(CommandResult::success())
    }
}
