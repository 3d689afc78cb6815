//! nodeprep CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::Term;
use nodeprep::cli::{Cli, CommandDispatcher};
use nodeprep::shell::is_ci;
use nodeprep::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("nodeprep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nodeprep=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Directory the application root search starts from.
///
/// The tool is meant to live inside (or next to) the application, so the
/// search starts where the executable is, not where the shell is.
fn start_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("nodeprep starting with args: {:?}", cli);

    // JSON goes to stdout, so keep everything else off it
    let output_mode = if cli.wants_json() {
        OutputMode::Silent
    } else if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let is_interactive = !is_ci() && Term::stdout().is_term();
    let mut ui = create_ui(is_interactive, output_mode);
    tracing::debug!("Interactive prompts: {}", ui.is_interactive());

    let dispatcher = CommandDispatcher::new(start_dir());
    tracing::debug!("Searching for application root from {}", dispatcher.start_dir().display());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
