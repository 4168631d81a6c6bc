//! pylaunch: starts `main.py` next to the launcher with the best available
//! interpreter, without a console window when possible.
//!
//! The sequence is fixed:
//!
//! 1. [`home`]: change into the directory that holds the launcher executable.
//! 2. [`probe`]: look for the windowless interpreter on the search path,
//!    falling back to the console interpreter.
//! 3. [`dispatch`]: start the entry point as a detached process.
//! 4. [`launcher::run`]: report success no matter what happened above.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod exit_codes;
pub mod home;
pub mod launcher;
pub mod probe;
#[cfg(test)]
mod test_support;
