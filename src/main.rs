//! Entry point for the `pylaunch` binary.
//!
//! Built for the Windows GUI subsystem so the launcher itself never flashes a
//! console window. Arguments do not affect the launch: `--help` and
//! `--version` print (where a console is attached) and the entry point is
//! still started; anything else is ignored.

#![cfg_attr(windows, windows_subsystem = "windows")]

use clap::Parser;
use clap::error::ErrorKind;
use pylaunch::config::LaunchConfig;
use pylaunch::launcher;
use std::ffi::OsString;
use std::process::ExitCode;

/// Start main.py next to this executable with pythonw, or python if
/// pythonw is not on PATH.
#[derive(Parser, Debug)]
#[command(name = "pylaunch")]
#[command(version, about, long_about = None)]
struct Cli {}

/// Parse arguments, printing help or version output when asked for.
///
/// Returns the kind of parse outcome that was not a plain launch, if any.
fn handle_args<I, T>(args: I) -> Option<ErrorKind>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(_) => None,
        Err(err) => {
            let kind = err.kind();
            if matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
            }
            Some(kind)
        }
    }
}

fn main() -> ExitCode {
    handle_args(std::env::args_os());

    let code = launcher::run(&LaunchConfig::default());
    ExitCode::from(code as u8)
}
