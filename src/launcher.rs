//! The launch sequence: enter the launcher directory, pick an interpreter,
//! start the entry point, and report success.

use crate::config::LaunchConfig;
use crate::dispatch::{LaunchPlan, spawn_detached};
use crate::error::{LaunchError, Result};
use crate::exit_codes;
use crate::home::{enter_home, resolve_home_from};
use crate::probe::select_interpreter;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Run the launch sequence for the running executable and the process
/// search path.
pub fn launch(config: &LaunchConfig) -> Result<LaunchPlan> {
    let home = env::current_exe()
        .map_err(LaunchError::CurrentExe)
        .and_then(resolve_home_from);
    let path_var = env::var_os("PATH");
    launch_in(home, config, path_var.as_deref())
}

/// Run the launch sequence as if the launcher lived at `exe`, probing
/// `path_var` instead of the process search path.
pub fn launch_from(
    exe: &Path,
    config: &LaunchConfig,
    path_var: Option<&OsStr>,
) -> Result<LaunchPlan> {
    launch_in(resolve_home_from(exe), config, path_var)
}

/// Steps 2 and 3 always run. A launcher directory that cannot be resolved
/// or entered only costs the working directory of the child.
fn launch_in(
    home: Result<PathBuf>,
    config: &LaunchConfig,
    path_var: Option<&OsStr>,
) -> Result<LaunchPlan> {
    let (home, entered) = match home {
        Ok(home) => match enter_home(&home) {
            Ok(()) => (home, true),
            Err(err) => {
                warn!(error = %err, "staying in caller directory");
                (home, false)
            }
        },
        Err(err) => {
            warn!(error = %err, "launcher directory unknown, using caller directory");
            (PathBuf::from("."), false)
        }
    };

    let interpreter = select_interpreter(config, path_var);
    let mut plan = LaunchPlan::new(&home, &config.entry_point, &interpreter);
    if !entered {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        plan = plan.with_working_dir(cwd);
    }
    spawn_detached(&plan)?;
    Ok(plan)
}

/// Launch and return the process exit code, which is always success.
pub fn run(config: &LaunchConfig) -> i32 {
    finish(launch(config))
}

fn finish(outcome: Result<LaunchPlan>) -> i32 {
    if let Err(err) = outcome {
        warn!(error = %err, "launch failed");
    }
    exit_codes::SUCCESS
}
