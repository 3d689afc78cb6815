//! Per-plugin installation results.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to one plugin directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PluginStatus {
    /// The installer exited zero.
    Installed {
        /// Captured standard output.
        stdout: String,
    },
    /// The installer exited nonzero or could not be started.
    Failed {
        /// Exit code, if the process ran and exited normally.
        exit_code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },
    /// The directory has no manifest.
    Skipped,
}

impl PluginStatus {
    /// Short label for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Installed { .. } => "installed",
            Self::Failed { .. } => "failed",
            Self::Skipped => "skipped",
        }
    }
}

/// Result for one plugin directory.
#[derive(Debug, Clone, Serialize)]
pub struct PluginOutcome {
    /// Directory name under the plugins directory.
    pub name: String,
    /// Manifest path, if the directory had one.
    pub manifest: Option<PathBuf>,
    /// What happened.
    #[serde(flatten)]
    pub status: PluginStatus,
}

/// Results of one installer pass over the plugins directory.
#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    /// The plugins directory that was processed.
    pub plugins_dir: PathBuf,
    /// True if the directory did not exist and was created.
    pub created_plugins_dir: bool,
    /// One entry per plugin directory, in processing order.
    pub outcomes: Vec<PluginOutcome>,
}

impl InstallReport {
    /// Create an empty report.
    pub fn new(plugins_dir: &Path, created_plugins_dir: bool) -> Self {
        Self {
            plugins_dir: plugins_dir.to_path_buf(),
            created_plugins_dir,
            outcomes: Vec::new(),
        }
    }

    /// Record a plugin outcome.
    pub fn push(&mut self, outcome: PluginOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of plugins whose requirements installed.
    pub fn installed_count(&self) -> usize {
        self.count(|s| matches!(s, PluginStatus::Installed { .. }))
    }

    /// Number of plugins whose install failed.
    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, PluginStatus::Failed { .. }))
    }

    /// Number of plugin directories without a manifest.
    pub fn skipped_count(&self) -> usize {
        self.count(|s| matches!(s, PluginStatus::Skipped))
    }

    /// Number of install invocations made.
    pub fn install_attempts(&self) -> usize {
        self.installed_count() + self.failed_count()
    }

    /// Names of plugins whose install failed.
    pub fn failed_plugins(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, PluginStatus::Failed { .. }))
            .map(|o| o.name.as_str())
            .collect()
    }

    /// Look up the outcome for a plugin by name.
    pub fn outcome(&self, name: &str) -> Option<&PluginOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    fn count(&self, pred: impl Fn(&PluginStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, status: PluginStatus) -> PluginOutcome {
        PluginOutcome {
            name: name.to_string(),
            manifest: None,
            status,
        }
    }

    fn sample_report() -> InstallReport {
        let mut report = InstallReport::new(Path::new("/app/custom_nodes"), false);
        report.push(outcome(
            "alpha",
            PluginStatus::Installed {
                stdout: "ok".into(),
            },
        ));
        report.push(outcome(
            "beta",
            PluginStatus::Failed {
                exit_code: Some(1),
                stderr: "boom".into(),
            },
        ));
        report.push(outcome("gamma", PluginStatus::Skipped));
        report
    }

    #[test]
    fn counts_by_status() {
        let report = sample_report();
        assert_eq!(report.installed_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.install_attempts(), 2);
    }

    #[test]
    fn failed_plugins_lists_names() {
        assert_eq!(sample_report().failed_plugins(), vec!["beta"]);
    }

    #[test]
    fn outcome_lookup_by_name() {
        let report = sample_report();
        assert_eq!(report.outcome("gamma").unwrap().status, PluginStatus::Skipped);
        assert!(report.outcome("delta").is_none());
    }

    #[test]
    fn status_labels() {
        assert_eq!(PluginStatus::Skipped.label(), "skipped");
        assert_eq!(
            PluginStatus::Installed {
                stdout: String::new()
            }
            .label(),
            "installed"
        );
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(sample_report()).unwrap();
        let outcomes = json["outcomes"].as_array().unwrap();
        assert_eq!(outcomes[0]["name"], "alpha");
        assert_eq!(outcomes[0]["status"], "installed");
        assert_eq!(outcomes[1]["status"], "failed");
        assert_eq!(outcomes[1]["exit_code"], 1);
        assert_eq!(outcomes[2]["status"], "skipped");
        assert_eq!(json["created_plugins_dir"], false);
    }
}
