//! Platform-specific virtual environment layout.

use std::path::{Path, PathBuf};

/// Directory layout of a Python virtual environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenvLayout {
    /// `Scripts/activate.bat`, executables in `Scripts`.
    Windows,
    /// `bin/activate`, executables in `bin`.
    Posix,
}

impl VenvLayout {
    /// Layout for the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Name of the executables directory.
    pub fn bin_dir_name(self) -> &'static str {
        match self {
            Self::Windows => "Scripts",
            Self::Posix => "bin",
        }
    }

    /// Activation marker relative to the environment root.
    pub fn activation_marker(self) -> PathBuf {
        match self {
            Self::Windows => Path::new("Scripts").join("activate.bat"),
            Self::Posix => Path::new("bin").join("activate"),
        }
    }

    /// Executables directory of `venv`.
    pub fn bin_dir(self, venv: &Path) -> PathBuf {
        venv.join(self.bin_dir_name())
    }

    /// Absolute activation marker path of `venv`.
    pub fn marker_path(self, venv: &Path) -> PathBuf {
        venv.join(self.activation_marker())
    }

    /// Whether `path` looks like a virtual environment.
    pub fn is_venv(self, path: &Path) -> bool {
        self.marker_path(path).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn windows_layout_uses_scripts() {
        let venv = Path::new("venv");
        assert_eq!(VenvLayout::Windows.bin_dir(venv), venv.join("Scripts"));
        assert_eq!(
            VenvLayout::Windows.marker_path(venv),
            venv.join("Scripts").join("activate.bat")
        );
    }

    #[test]
    fn posix_layout_uses_bin() {
        let venv = Path::new("venv");
        assert_eq!(VenvLayout::Posix.bin_dir(venv), venv.join("bin"));
        assert_eq!(
            VenvLayout::Posix.marker_path(venv),
            venv.join("bin").join("activate")
        );
    }

    #[test]
    fn is_venv_requires_marker() {
        let temp = TempDir::new().unwrap();
        let layout = VenvLayout::Posix;
        assert!(!layout.is_venv(temp.path()));

        fs::create_dir_all(temp.path().join("bin")).unwrap();
        assert!(!layout.is_venv(temp.path()));

        fs::write(temp.path().join("bin").join("activate"), "").unwrap();
        assert!(layout.is_venv(temp.path()));
        assert!(!VenvLayout::Windows.is_venv(temp.path()));
    }
}
