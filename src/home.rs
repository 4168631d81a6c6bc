//! Launcher directory resolution.
//!
//! The launcher always works from the directory that contains its own
//! executable, so the entry point is found next to the launcher no matter
//! where it was invoked from.

use crate::error::{LaunchError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the directory containing `exe`.
///
/// Relative paths are anchored at the current working directory. Symlinks
/// are not followed: a link to the launcher uses the link's directory.
pub fn resolve_home_from<P: AsRef<Path>>(exe: P) -> Result<PathBuf> {
    let exe = exe.as_ref();
    let exe = if exe.is_absolute() {
        exe.to_path_buf()
    } else {
        env::current_dir()
            .map_err(LaunchError::CurrentExe)?
            .join(exe)
    };

    if let Some(parent) = exe.parent().filter(|p| !p.as_os_str().is_empty()) {
        return Ok(parent.to_path_buf());
    }
    Err(LaunchError::NoParentDir(exe))
}

/// Make `home` the current working directory.
pub fn enter_home(home: &Path) -> Result<()> {
    env::set_current_dir(home).map_err(|source| LaunchError::ChangeDir {
        path: home.to_path_buf(),
        source,
    })?;
    debug!(home = %home.display(), "changed into launcher directory");
    Ok(())
}
