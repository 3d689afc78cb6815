//! pip / venv backed package manager.

use std::ffi::OsString;
use std::path::Path;

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};
use crate::venv::ProcessEnv;

use super::PackageManager;

/// Creates environments with `python -m venv` and installs with
/// `python -m pip install -r`.
#[derive(Debug, Clone)]
pub struct PipPackageManager {
    python: String,
}

impl PipPackageManager {
    /// Create a package manager driven by the given interpreter.
    pub fn new(python: &str) -> Self {
        Self {
            python: python.to_string(),
        }
    }

    /// The configured base interpreter.
    pub fn python(&self) -> &str {
        &self.python
    }

    /// Arguments for creating an environment at `path`.
    pub fn venv_args(path: &Path) -> Vec<OsString> {
        vec!["-m".into(), "venv".into(), path.as_os_str().to_os_string()]
    }

    /// Arguments for installing `manifest`.
    pub fn install_args(manifest: &Path) -> Vec<OsString> {
        vec![
            "-m".into(),
            "pip".into(),
            "install".into(),
            "-r".into(),
            manifest.as_os_str().to_os_string(),
        ]
    }
}

impl PackageManager for PipPackageManager {
    fn create_environment(&self, path: &Path) -> Result<CommandResult> {
        execute(
            OsString::from(&self.python).as_os_str(),
            &Self::venv_args(path),
            &CommandOptions::captured(),
        )
    }

    fn install_manifest(&self, manifest: &Path, env: &ProcessEnv) -> Result<CommandResult> {
        let program = env.resolve_program(&self.python);
        tracing::debug!(
            "Installing {} with {}",
            manifest.display(),
            program.display()
        );

        let options = CommandOptions {
            env: env.child_vars()?,
            ..CommandOptions::captured()
        };
        execute(program.as_os_str(), &Self::install_args(manifest), &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn venv_args_use_module_form() {
        let args = PipPackageManager::venv_args(Path::new("/srv/app/venv"));
        assert_eq!(
            args,
            vec![
                OsString::from("-m"),
                OsString::from("venv"),
                OsString::from("/srv/app/venv")
            ]
        );
    }

    #[test]
    fn install_args_point_at_manifest() {
        let args =
            PipPackageManager::install_args(Path::new("/srv/app/custom_nodes/a/requirements.txt"));
        assert_eq!(args[..4], ["-m", "pip", "install", "-r"].map(OsString::from));
        assert_eq!(
            PathBuf::from(&args[4]),
            PathBuf::from("/srv/app/custom_nodes/a/requirements.txt")
        );
    }

    #[test]
    fn missing_interpreter_is_an_error() {
        let pm = PipPackageManager::new("nodeprep-no-such-python");
        let result = pm.create_environment(Path::new("/tmp/never-created"));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn install_runs_with_activated_environment() {
        use crate::venv::{activate, VenvLayout};
        use std::fs;
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let venv = temp.path().join("venv");
        let bin = venv.join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("activate"), "").unwrap();

        // Only the activated bin directory provides this interpreter name.
        std::os::unix::fs::symlink("/bin/echo", bin.join("fakepy")).unwrap();

        let mut env = ProcessEnv::from_current();
        activate(&mut env, &venv, VenvLayout::Posix).unwrap();

        let pm = PipPackageManager::new("fakepy");
        let manifest = temp.path().join("requirements.txt");
        let result = pm.install_manifest(&manifest, &env).unwrap();

        assert!(result.success);
        assert_eq!(
            result.stdout.trim(),
            format!("-m pip install -r {}", manifest.display())
        );
    }
}
