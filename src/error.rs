//! Error types for the launcher.
//!
//! Uses thiserror for derive macros. None of these errors ever reach the
//! user: `launcher::run` swallows them and exits with success. They exist so
//! each step can propagate with `?` and the suppression lives in one place.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for launcher steps.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The path of the running executable could not be determined.
    #[error("failed to locate launcher executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    /// The executable path has no parent directory.
    #[error("launcher path '{}' has no parent directory", .0.display())]
    NoParentDir(PathBuf),

    /// Changing into the launcher directory failed.
    #[error("failed to change directory to '{}': {source}", path.display())]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interpreter process could not be created.
    #[error("failed to start '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
