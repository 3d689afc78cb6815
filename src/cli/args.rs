//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// nodeprep - Prepare a plugin-based application's Python environment.
#[derive(Debug, Parser)]
#[command(name = "nodeprep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML settings file
    #[arg(short, long, global = true, env = "NODEPREP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base Python interpreter used to create environments
    #[arg(long, global = true, env = "NODEPREP_PYTHON", value_name = "PROGRAM")]
    pub python: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Locate the app, prepare its environment and install plugin requirements (default)
    Run(RunArgs),

    /// List plugin directories and whether they declare requirements
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Print the install report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl Cli {
    /// Whether the selected command writes JSON to stdout.
    pub fn wants_json(&self) -> bool {
        match &self.command {
            Some(Commands::Run(args)) => args.json,
            Some(Commands::List(args)) => args.json,
            _ => false,
        }
    }
}
