//! Plugin requirements.
//!
//! - [`scan`] - Lists plugin directories and their manifests
//! - [`installer`] - Runs one install per manifest
//! - [`report`] - What happened to each plugin

pub mod installer;
pub mod report;
pub mod scan;

pub use installer::RequirementsInstaller;
pub use report::{InstallReport, PluginOutcome, PluginStatus};
pub use scan::{scan_plugins, PluginDir};
