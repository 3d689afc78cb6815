//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{NodeprepError, Result};
use crate::plugins::{InstallReport, PluginStatus};

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface, PROMPT_ENV_PREFIX};

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `NODEPREP_PROMPT_<KEY>` environment variables.
/// A prompt without one is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let env_key = prompt.env_var();
        if let Some(value) = self.env_overrides.get(&env_key) {
            tracing::debug!("Prompt '{}' answered from {}", prompt.key, env_key);
            return Ok(value.clone());
        }

        Err(NodeprepError::PromptUnavailable {
            key: prompt.key.clone(),
            env_var: env_key,
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_output_block(&mut self, title: &str, output: &str) {
        if !self.mode.shows_command_output() || output.trim().is_empty() {
            return;
        }
        println!("    --- {} ---", title);
        for line in output.lines() {
            println!("    {}", line);
        }
    }

    fn show_install_summary(&mut self, report: &InstallReport) {
        if !self.mode.shows_status() || report.outcomes.is_empty() {
            return;
        }

        println!();
        println!("Summary:");
        for outcome in &report.outcomes {
            let icon = match outcome.status {
                PluginStatus::Installed { .. } => "✓",
                PluginStatus::Failed { .. } => "✗",
                PluginStatus::Skipped => "○",
            };
            println!("  {} {} ({})", icon, outcome.name, outcome.status.label());
        }
        println!(
            "  {} installed · {} failed · {} skipped",
            report.installed_count(),
            report.failed_count(),
            report.skipped_count()
        );
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints the final status line.
struct NoopSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
