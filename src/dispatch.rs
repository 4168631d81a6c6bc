//! Detached process dispatch.
//!
//! The entry point is started as an independent process: standard streams
//! are null, and the child handle is dropped without waiting. On Windows the
//! windowless interpreter is detached from any console, while the console
//! interpreter gets a fresh console like `start` would give it. On Unix the
//! child gets its own process group so it outlives the launcher's session
//! signals.

use crate::error::{LaunchError, Result};
use crate::probe::Interpreter;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

#[cfg(windows)]
const DETACHED_PROCESS: u32 = 0x0000_0008;
#[cfg(windows)]
const CREATE_NEW_CONSOLE: u32 = 0x0000_0010;
#[cfg(windows)]
const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;

/// Everything needed to start the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Interpreter to execute.
    pub program: PathBuf,
    /// Absolute path of the entry-point script.
    pub entry_point: PathBuf,
    /// Working directory of the child.
    pub working_dir: PathBuf,
    /// Whether `program` is the windowless variant.
    pub windowless: bool,
}

impl LaunchPlan {
    /// Plan a launch of `entry_point` (relative to `home`) with `interpreter`.
    pub fn new(home: &Path, entry_point: &str, interpreter: &Interpreter) -> Self {
        Self {
            program: interpreter.program().to_path_buf(),
            entry_point: home.join(entry_point),
            working_dir: home.to_path_buf(),
            windowless: interpreter.is_windowless(),
        }
    }

    /// Run the child from `dir` instead of the launcher directory.
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Quoted command line, for diagnostics.
    pub fn command_line(&self) -> String {
        let program = self.program.to_string_lossy();
        let entry_point = self.entry_point.to_string_lossy();
        shell_words::join([program.as_ref(), entry_point.as_ref()])
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(&self.entry_point)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        self.detach(&mut command);
        command
    }

    /// Process creation flags: no console at all for the windowless
    /// interpreter, a new console for the console one.
    #[cfg(windows)]
    fn creation_flags(&self) -> u32 {
        let console = if self.windowless {
            DETACHED_PROCESS
        } else {
            CREATE_NEW_CONSOLE
        };
        console | CREATE_NEW_PROCESS_GROUP
    }

    #[cfg(windows)]
    fn detach(&self, command: &mut Command) {
        use std::os::windows::process::CommandExt;

        command.creation_flags(self.creation_flags());
    }

    #[cfg(unix)]
    fn detach(&self, command: &mut Command) {
        use std::os::unix::process::CommandExt;

        command.process_group(0);
    }

    #[cfg(not(any(windows, unix)))]
    fn detach(&self, _command: &mut Command) {}
}

/// Start the planned process and return without waiting for it.
pub fn spawn_detached(plan: &LaunchPlan) -> Result<()> {
    debug!(command = %plan.command_line(), windowless = plan.windowless, "starting entry point");
    let child = plan
        .command()
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            program: plan.program.clone(),
            source,
        })?;
    debug!(pid = child.id(), "entry point started");
    // Dropping the handle neither waits for nor kills the child.
    drop(child);
    Ok(())
}
