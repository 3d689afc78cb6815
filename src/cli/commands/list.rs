//! List command implementation.
//!
//! The `nodeprep list` command shows plugin directories and whether each
//! declares requirements. It never touches a virtual environment.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::plugins::{scan_plugins, PluginDir};
use crate::setup::SetupRunner;
use crate::ui::{should_use_colors, NodeprepTheme, UserInterface};
use crate::venv::VenvLayout;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    start_dir: PathBuf,
    settings: Settings,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(start_dir: &Path, settings: Settings, args: ListArgs) -> Self {
        Self {
            start_dir: start_dir.to_path_buf(),
            settings,
            args,
        }
    }

    /// Locate the app and list its plugin directories.
    ///
    /// A missing plugins directory yields an empty list.
    pub fn collect(&self, ui: &mut dyn UserInterface) -> Result<Vec<PluginDir>> {
        let runner = SetupRunner::new(&self.settings, VenvLayout::current());
        let root = runner.locate_root(&self.start_dir, ui)?;
        let plugins_dir = runner.plugins_dir(&root);

        if !plugins_dir.is_dir() {
            ui.warning(&format!(
                "Plugins directory not found: {}",
                plugins_dir.display()
            ));
            return Ok(Vec::new());
        }

        scan_plugins(&plugins_dir, &self.settings.manifest)
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let plugins = self.collect(ui)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&plugins).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            NodeprepTheme::new()
        } else {
            NodeprepTheme::plain()
        };

        ui.message(&format!("  {}", theme.header.apply_to("Plugins:")));
        if plugins.is_empty() {
            ui.message(&format!("    {}", theme.dim.apply_to("(none)")));
        }
        for plugin in &plugins {
            let detail = match &plugin.manifest {
                Some(_) => theme.success.apply_to(self.settings.manifest.as_str()),
                None => theme.dim.apply_to("no requirements"),
            };
            ui.message(&format!(
                "    {} {}",
                theme.highlight.apply_to(&plugin.name),
                detail
            ));
        }

        Ok(CommandResult::success())
    }
}
