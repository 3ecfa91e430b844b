//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder defaults and explicit overrides.
//! - Test `.env` parsing and environment variable mapping.
//! - Test precedence, managed-runtime detection, and the startup entry points.
//!
//! Invariants:
//! - Environment reads go through `Env::from_vars` so tests never see host variables.
//! - Tests that change the working directory hold `env_lock()` and run `#[serial]`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::env::Env;
use crate::loader::builder::ConfigLoader;

pub mod precedence_tests;

/// Returns the global test lock for working directory isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// A `.env` path that never exists.
pub fn missing_dotenv_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("does-not-exist.env")
}

/// A loader that sees only `vars` and no `.env` file.
pub fn hermetic_loader(vars: &[(&str, &str)]) -> ConfigLoader {
    ConfigLoader::new()
        .with_env(Env::from_vars(vars.iter().copied()))
        .with_dotenv_path(missing_dotenv_path())
}
