//! Executable lookup against an explicit search path.
//!
//! `Command::new` resolves bare program names against the parent's `PATH`
//! on some platforms and the child's on others. Resolving up front against
//! the search path we intend the child to see removes that ambiguity.

use std::path::{Path, PathBuf};

/// Extensions tried for a bare program name on Windows.
#[cfg(windows)]
const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "bat", "cmd"];

/// Returns true if `program` is a bare name rather than a path.
pub fn is_bare_name(program: &str) -> bool {
    let path = Path::new(program);
    !path.is_absolute() && path.components().count() == 1
}

/// Whether `path` has any execute bit set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Windows decides by extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

fn is_runnable(candidate: &Path) -> bool {
    candidate.is_file() && is_executable(candidate)
}

/// Find `program` in `dirs`, first executable match wins.
///
/// Returns `None` for names that are already paths or that no directory
/// contains.
pub fn find_executable(program: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    if !is_bare_name(program) {
        return None;
    }

    for dir in dirs {
        let candidate = dir.join(program);
        if is_runnable(&candidate) {
            return Some(candidate);
        }

        #[cfg(windows)]
        for ext in EXECUTABLE_EXTENSIONS {
            let candidate = dir.join(format!("{}.{}", program, ext));
            if is_runnable(&candidate) {
                return Some(candidate);
            }
        }
    }

    None
}
