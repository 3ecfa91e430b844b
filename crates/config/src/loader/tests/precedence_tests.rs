//! Precedence tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test explicit > environment > `.env` > default for every field.

use secrecy::ExposeSecret;
use std::fs;
use tempfile::TempDir;

use super::hermetic_loader;
use crate::loader::builder::ConfigLoader;
use crate::types::Config;

const FILE_CONTENTS: &str = "AWS_BEDROCK_API_KEY=file-key\n\
                             AWS_BEDROCK_MODEL_ID=file-model\n\
                             AWS_REGION=file-region\n";

const ENV_VARS: &[(&str, &str)] = &[
    ("AWS_BEDROCK_API_KEY", "env-key"),
    ("AWS_BEDROCK_MODEL_ID", "env-model"),
    ("AWS_REGION", "env-region"),
];

fn file_then_env(temp_dir: &TempDir, vars: &[(&str, &str)]) -> ConfigLoader {
    let path = temp_dir.path().join(".env");
    fs::write(&path, FILE_CONTENTS).unwrap();
    hermetic_loader(vars)
        .load_dotenv_from(&path)
        .unwrap()
        .from_env()
}

fn credential(config: &Config) -> Option<&str> {
    config.credential.as_ref().map(|c| c.expose_secret())
}

#[test]
fn test_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = file_then_env(&temp_dir, &[]).build();
    assert_eq!(credential(&config), Some("file-key"));
    assert_eq!(config.model_id, "file-model");
    assert_eq!(config.region, "file-region");
}

#[test]
fn test_env_overrides_file_for_every_field() {
    let temp_dir = TempDir::new().unwrap();
    let config = file_then_env(&temp_dir, ENV_VARS).build();
    assert_eq!(credential(&config), Some("env-key"));
    assert_eq!(config.model_id, "env-model");
    assert_eq!(config.region, "env-region");
}

#[test]
fn test_env_overrides_file_role_flag() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, "USE_IAM_ROLE=false\n").unwrap();
    let config = hermetic_loader(&[("USE_IAM_ROLE", "true")])
        .load_dotenv_from(&path)
        .unwrap()
        .from_env()
        .build();
    assert!(config.use_iam_role);
}

#[test]
fn test_env_fallback_region_overrides_file_region() {
    let temp_dir = TempDir::new().unwrap();
    let config = file_then_env(&temp_dir, &[("AWS_DEFAULT_REGION", "env-fallback")]).build();
    assert_eq!(config.region, "env-fallback");
}

#[test]
fn test_explicit_overrides_env_and_file_for_every_field() {
    let temp_dir = TempDir::new().unwrap();
    let config = file_then_env(&temp_dir, ENV_VARS)
        .with_credential("explicit-key".to_string())
        .with_model_id("explicit-model".to_string())
        .with_region("explicit-region".to_string())
        .build();
    assert_eq!(credential(&config), Some("explicit-key"));
    assert_eq!(config.model_id, "explicit-model");
    assert_eq!(config.region, "explicit-region");
}

#[test]
fn test_explicit_false_overrides_env_role_flag() {
    let config = hermetic_loader(&[("USE_IAM_ROLE", "true")])
        .from_env()
        .with_use_iam_role(false)
        .build();
    assert!(!config.use_iam_role);
}

#[test]
fn test_unset_layers_keep_lower_values() {
    let temp_dir = TempDir::new().unwrap();
    let config = file_then_env(&temp_dir, &[("AWS_REGION", "env-region")])
        .with_model_id("explicit-model".to_string())
        .build();
    assert_eq!(credential(&config), Some("file-key"));
    assert_eq!(config.region, "env-region");
    assert_eq!(config.model_id, "explicit-model");
}
