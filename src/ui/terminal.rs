//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;
use crate::plugins::{InstallReport, PluginStatus};

use super::{
    prompt_user, should_use_colors, NodeprepTheme, NonInteractiveUI, OutputMode,
    ProgressSpinner, Prompt, SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    /// Errors go to stderr so `--json` keeps stdout clean.
    err_term: Term,
    theme: NodeprepTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            NodeprepTheme::new()
        } else {
            NodeprepTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_output_block(&mut self, title: &str, output: &str) {
        if !self.mode.shows_command_output() || output.trim().is_empty() {
            return;
        }

        let b = &self.theme.border;
        writeln!(
            self.term,
            "    {} {} {}",
            b.apply_to("┌─"),
            b.apply_to(title),
            b.apply_to("─".repeat(32usize.saturating_sub(title.chars().count())))
        )
        .ok();
        for line in output.lines() {
            writeln!(self.term, "    {} {}", b.apply_to("│"), line).ok();
        }
        writeln!(
            self.term,
            "    {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }

    fn show_install_summary(&mut self, report: &InstallReport) {
        if !self.mode.shows_status() || report.outcomes.is_empty() {
            return;
        }

        let b = &self.theme.border;

        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("┌─"),
            b.apply_to("Summary ──────────────────────────")
        )
        .ok();

        for outcome in &report.outcomes {
            let (icon, detail) = match &outcome.status {
                PluginStatus::Installed { .. } => (
                    self.theme.success.apply_to("✓").to_string(),
                    String::new(),
                ),
                PluginStatus::Failed { exit_code, .. } => (
                    self.theme.error.apply_to("✗").to_string(),
                    match exit_code {
                        Some(code) => format!("exit code {}", code),
                        None => "could not run installer".to_string(),
                    },
                ),
                PluginStatus::Skipped => (
                    self.theme.dim.apply_to("○").to_string(),
                    "no manifest".to_string(),
                ),
            };

            writeln!(
                self.term,
                "  {} {} {:<28} {}",
                b.apply_to("│"),
                icon,
                outcome.name,
                self.theme.dim.apply_to(detail),
            )
            .ok();
        }

        writeln!(
            self.term,
            "  {}",
            b.apply_to("├────────────────────────────────────")
        )
        .ok();
        writeln!(
            self.term,
            "  {} {} installed {} {} failed {} {} skipped",
            b.apply_to("│"),
            report.installed_count(),
            self.theme.dim.apply_to("·"),
            report.failed_count(),
            self.theme.dim.apply_to("·"),
            report.skipped_count(),
        )
        .ok();
        writeln!(
            self.term,
            "  {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
