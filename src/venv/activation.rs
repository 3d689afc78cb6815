//! Virtual environment activation.
//!
//! Activation edits a [`ProcessEnv`] value rather than the real process
//! environment. Every child process spawned afterwards receives the
//! edited `PATH` and `VIRTUAL_ENV`, which is all a shell `activate` script
//! achieves for the commands that follow it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{NodeprepError, Result};
use crate::shell::find_executable;

use super::layout::VenvLayout;

/// Search-path variable.
pub const PATH_VAR: &str = "PATH";

/// Active-environment marker variable.
pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

/// The environment handed to child processes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnv {
    search_path: Vec<PathBuf>,
    virtual_env: Option<PathBuf>,
}

impl ProcessEnv {
    /// Snapshot the current process's `PATH` and `VIRTUAL_ENV`.
    pub fn from_current() -> Self {
        let search_path = std::env::var_os(PATH_VAR)
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        let virtual_env = std::env::var_os(VIRTUAL_ENV_VAR).map(PathBuf::from);

        Self {
            search_path,
            virtual_env,
        }
    }

    /// Create from an explicit search path, with no active environment.
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            virtual_env: None,
        }
    }

    /// Directories searched for executables, highest priority first.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// The active virtual environment, if any.
    pub fn virtual_env(&self) -> Option<&Path> {
        self.virtual_env.as_deref()
    }

    /// Put `dir` in front of the search path.
    pub fn prepend_path(&mut self, dir: PathBuf) {
        self.search_path.insert(0, dir);
    }

    /// Mark `venv` as the active environment.
    pub fn set_virtual_env(&mut self, venv: PathBuf) {
        self.virtual_env = Some(venv);
    }

    /// The search path joined with the platform separator.
    pub fn joined_path(&self) -> Result<OsString> {
        let joined = std::env::join_paths(&self.search_path)
            .context("search path entry contains the path separator")?;
        Ok(joined)
    }

    /// Variables to set on a child process.
    pub fn child_vars(&self) -> Result<Vec<(String, OsString)>> {
        let mut vars = vec![(PATH_VAR.to_string(), self.joined_path()?)];
        if let Some(venv) = &self.virtual_env {
            vars.push((VIRTUAL_ENV_VAR.to_string(), venv.clone().into_os_string()));
        }
        Ok(vars)
    }

    /// Resolve `program` the way a child with this environment would.
    ///
    /// Bare names are looked up on the search path; anything else, or a
    /// name that is not found, is returned unchanged.
    pub fn resolve_program(&self, program: &str) -> PathBuf {
        find_executable(program, &self.search_path).unwrap_or_else(|| PathBuf::from(program))
    }
}

/// Activate `venv` in `env`.
///
/// The activation marker is checked again here so a path that went stale
/// after discovery (or a freshly created environment that came out
/// incomplete) is caught before anything is installed into it.
pub fn activate(env: &mut ProcessEnv, venv: &Path, layout: VenvLayout) -> Result<()> {
    if !layout.is_venv(venv) {
        return Err(NodeprepError::ActivationMarkerMissing {
            path: venv.to_path_buf(),
        });
    }

    let bin_dir = layout.bin_dir(venv);
    tracing::debug!("Prepending {} to search path", bin_dir.display());
    env.prepend_path(bin_dir);
    env.set_virtual_env(venv.to_path_buf());
    tracing::info!("Activated virtual environment: {}", venv.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_venv(dir: &Path) {
        fs::create_dir_all(dir.join("bin")).unwrap();
        fs::write(dir.join("bin").join("activate"), "").unwrap();
    }

    fn fake_binary(path: &Path) {
        fs::write(path, "").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn activation_prepends_bin_and_marks_env() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join("venv");
        make_venv(&venv);

        let mut env = ProcessEnv::new(vec![PathBuf::from("/usr/bin")]);
        activate(&mut env, &venv, VenvLayout::Posix).unwrap();

        assert_eq!(env.search_path()[0], venv.join("bin"));
        assert_eq!(env.search_path()[1], PathBuf::from("/usr/bin"));
        assert_eq!(env.virtual_env(), Some(venv.as_path()));
    }

    #[test]
    fn activation_without_marker_fails() {
        let temp = TempDir::new().unwrap();
        let mut env = ProcessEnv::new(vec![PathBuf::from("/usr/bin")]);

        let err = activate(&mut env, temp.path(), VenvLayout::Posix).unwrap_err();
        assert!(matches!(err, NodeprepError::ActivationMarkerMissing { .. }));
        assert_eq!(env.search_path(), [PathBuf::from("/usr/bin")]);
        assert!(env.virtual_env().is_none());
    }

    #[test]
    fn child_vars_include_path_and_virtual_env() {
        let mut env = ProcessEnv::new(vec![PathBuf::from("/usr/bin")]);
        env.prepend_path(PathBuf::from("/srv/venv/bin"));
        env.set_virtual_env(PathBuf::from("/srv/venv"));

        let vars = env.child_vars().unwrap();
        let path = &vars.iter().find(|(k, _)| k == PATH_VAR).unwrap().1;
        let entries: Vec<PathBuf> = std::env::split_paths(path).collect();
        assert_eq!(
            entries,
            vec![PathBuf::from("/srv/venv/bin"), PathBuf::from("/usr/bin")]
        );
        let venv = &vars.iter().find(|(k, _)| k == VIRTUAL_ENV_VAR).unwrap().1;
        assert_eq!(venv, &OsString::from("/srv/venv"));
    }

    #[test]
    fn child_vars_omit_virtual_env_when_inactive() {
        let env = ProcessEnv::new(vec![PathBuf::from("/usr/bin")]);
        let vars = env.child_vars().unwrap();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].0, PATH_VAR);
    }

    #[test]
    fn resolve_program_prefers_activated_bin() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join("venv");
        let system = temp.path().join("system");
        make_venv(&venv);
        fs::create_dir_all(&system).unwrap();
        fake_binary(&system.join("python3"));
        fake_binary(&venv.join("bin").join("python3"));

        let mut env = ProcessEnv::new(vec![system.clone()]);
        assert_eq!(env.resolve_program("python3"), system.join("python3"));

        activate(&mut env, &venv, VenvLayout::Posix).unwrap();
        assert_eq!(env.resolve_program("python3"), venv.join("bin").join("python3"));
    }

    #[test]
    fn resolve_program_passes_through_unknown_names() {
        let env = ProcessEnv::new(vec![]);
        assert_eq!(env.resolve_program("python3"), PathBuf::from("python3"));
        assert_eq!(
            env.resolve_program("/opt/python/bin/python3"),
            PathBuf::from("/opt/python/bin/python3")
        );
    }

    #[test]
    fn from_current_reads_path() {
        let env = ProcessEnv::from_current();
        let expected: Vec<PathBuf> = std::env::var_os("PATH")
            .map(|p| std::env::split_paths(&p).collect())
            .unwrap_or_default();
        assert_eq!(env.search_path(), expected.as_slice());
    }
}
