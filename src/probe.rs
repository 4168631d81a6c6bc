//! Interpreter probing on the executable search path.
//!
//! The probe is silent and best-effort. A missing search path, an
//! unreadable directory, or a candidate that is not an executable file all
//! count as "not found"; none of these are errors.

use crate::config::LaunchConfig;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The interpreter chosen for the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpreter {
    /// Windowless variant, found on the search path.
    Windowless(PathBuf),
    /// Console variant. Holds the resolved path when found, otherwise the
    /// bare name so the OS gets the final say at spawn time.
    Console(PathBuf),
}

impl Interpreter {
    /// Program to execute.
    pub fn program(&self) -> &Path {
        match self {
            Interpreter::Windowless(path) | Interpreter::Console(path) => path,
        }
    }

    pub fn is_windowless(&self) -> bool {
        matches!(self, Interpreter::Windowless(_))
    }
}

/// Search each directory of `path_var` for an executable named `name`.
pub fn find_on_path(name: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    let path_var = path_var?;
    env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

/// Pick the windowless interpreter if it is on the search path, otherwise
/// the console interpreter.
pub fn select_interpreter(config: &LaunchConfig, path_var: Option<&OsStr>) -> Interpreter {
    if let Some(path) = find_on_path(&config.windowless_exe(), path_var) {
        debug!(interpreter = %path.display(), "windowless interpreter found");
        return Interpreter::Windowless(path);
    }

    let console = config.console_exe();
    let path = find_on_path(&console, path_var).unwrap_or_else(|| PathBuf::from(&console));
    debug!(interpreter = %path.display(), "falling back to console interpreter");
    Interpreter::Console(path)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
