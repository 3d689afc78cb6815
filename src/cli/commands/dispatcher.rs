//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{load_settings, Settings, SettingsOverrides};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    start_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher whose root search begins at `start_dir`.
    pub fn new(start_dir: PathBuf) -> Self {
        Self { start_dir }
    }

    /// Directory the root search begins at.
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand means `run` with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd =
                    super::list::ListCommand::new(&self.start_dir, settings(cli)?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Run(args)) => {
                let cmd =
                    super::run::RunCommand::new(&self.start_dir, settings(cli)?, args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::run::RunCommand::new(
                    &self.start_dir,
                    settings(cli)?,
                    RunArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}

fn settings(cli: &Cli) -> Result<Settings> {
    let overrides = SettingsOverrides {
        python: cli.python.clone(),
    };
    load_settings(cli.config.as_deref(), &overrides)
}
