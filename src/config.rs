//! Fixed launch settings.
//!
//! Nothing here is read from disk or the environment. The defaults name the
//! entry point and the two interpreter variants; tests build their own
//! `LaunchConfig` to point at fake interpreters.

/// Entry-point file, resolved relative to the launcher directory.
pub const DEFAULT_ENTRY_POINT: &str = "main.py";

/// Interpreter variant that does not open a console window.
pub const DEFAULT_WINDOWLESS_INTERPRETER: &str = "pythonw";

/// Console interpreter used when the windowless variant is unavailable.
pub const DEFAULT_CONSOLE_INTERPRETER: &str = "python";

/// Names used by the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// File name of the entry point, relative to the launcher directory.
    pub entry_point: String,

    /// Base name of the windowless interpreter (without platform suffix).
    pub windowless: String,

    /// Base name of the console interpreter (without platform suffix).
    pub console: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            windowless: DEFAULT_WINDOWLESS_INTERPRETER.to_string(),
            console: DEFAULT_CONSOLE_INTERPRETER.to_string(),
        }
    }
}

impl LaunchConfig {
    /// Platform executable name for the windowless interpreter.
    pub fn windowless_exe(&self) -> String {
        with_exe_suffix(&self.windowless)
    }

    /// Platform executable name for the console interpreter.
    pub fn console_exe(&self) -> String {
        with_exe_suffix(&self.console)
    }
}

fn with_exe_suffix(name: &str) -> String {
    let suffix = std::env::consts::EXE_SUFFIX;
    if suffix.is_empty() || name.to_ascii_lowercase().ends_with(suffix) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}
