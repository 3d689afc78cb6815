//! Package manager abstraction.
//!
//! The locator, finder, and installer never spawn processes themselves;
//! they go through [`PackageManager`]. [`PipPackageManager`] is the real
//! implementation and [`MockPackageManager`] records calls for tests.

pub mod mock;
pub mod pip;

pub use mock::{MockPackageManager, RecordedInstall};
pub use pip::PipPackageManager;

use std::path::Path;

use crate::error::Result;
use crate::shell::CommandResult;
use crate::venv::ProcessEnv;

/// The external tooling that creates environments and installs manifests.
pub trait PackageManager {
    /// Create a new virtual environment at `path`.
    ///
    /// `Err` means the command could not be started; a started command that
    /// exits nonzero is reported through [`CommandResult::success`].
    fn create_environment(&self, path: &Path) -> Result<CommandResult>;

    /// Install the dependencies listed in `manifest` into the environment
    /// described by `env`, capturing stdout and stderr.
    fn install_manifest(&self, manifest: &Path, env: &ProcessEnv) -> Result<CommandResult>;
}
