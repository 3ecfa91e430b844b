//! Shared test utilities for bedrock-auth integration tests.
//!
//! Invariants / Assumptions:
//! - Commands run in a fresh temporary directory so no local `.env` is read.
//! - Every variable the resolver reads is cleared unless a test sets it.

use assert_cmd::Command;
use tempfile::TempDir;

const RESOLVER_VARS: &[&str] = &[
    "AWS_BEDROCK_API_KEY",
    "AWS_BEDROCK_MODEL_ID",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "USE_IAM_ROLE",
    "AWS_EXECUTION_ENV",
    "AWS_LAMBDA_FUNCTION_NAME",
    "RUST_LOG",
];

/// Returns a hermetic `bedrock-auth` command running inside `dir`.
pub fn bedrock_cmd(dir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("bedrock-auth");
    cmd.current_dir(dir.path());
    for var in RESOLVER_VARS {
        cmd.env_remove(var);
    }
    cmd
}
