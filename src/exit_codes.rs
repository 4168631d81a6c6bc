//! Exit code constants for the launcher.
//!
//! The launcher reports success unconditionally. Failures to resolve its
//! directory, find an interpreter, or start the entry point are not
//! reflected in the exit status.

/// Successful execution. Also the status for every swallowed failure.
pub const SUCCESS: i32 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
