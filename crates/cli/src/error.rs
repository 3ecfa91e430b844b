//! CLI exit codes for scripting and automation.
//!
//! Invariants:
//! - Exit code 2 is reserved for incomplete configuration so startup scripts can
//!   tell "fix your settings" apart from other failures.

use bedrock_auth_config::ConfigError;

/// Structured exit codes for bedrock-auth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration resolved.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unreadable `.env` file or other failure.
    GeneralError = 1,

    /// Configuration incomplete - validation failed for the resolved mode.
    ///
    /// Resolution from flags, `.env` and the environment never leaves the
    /// credential or region empty, so `--check` does not produce this today.
    /// The mapping is covered by the `check` tests in `main.rs`, which use
    /// hand-built configs.
    ConfigurationIncomplete = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&anyhow::Error> for ExitCode {
    fn from(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::MissingCredential | ConfigError::MissingRegion) => {
                ExitCode::ConfigurationIncomplete
            }
            _ => ExitCode::GeneralError,
        }
    }
}
