//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and environment variables.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Detect managed AWS runtimes and default them to IAM role authentication.
//!
//! Does NOT handle:
//! - Writing configuration to the process environment (see `publish.rs`).
//! - Verifying credentials against AWS.
//!
//! Invariants / Assumptions:
//! - Later layers overwrite earlier ones; callers chain `load_dotenv()`,
//!   `from_env()`, then `with_*` overrides to get explicit > env > file > default.
//! - Blank values from any layer are ignored.

mod builder;
mod dotenv;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
