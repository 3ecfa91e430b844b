//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the resolved `Config` and the derived `AuthMode`.
//! - Validate a resolved configuration against its authentication mode.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Writing to the process environment (see `publish` module).
//!
//! Invariants:
//! - Credentials use `secrecy::SecretString` to prevent accidental logging.

mod auth;

pub use auth::{AuthMode, Config};
