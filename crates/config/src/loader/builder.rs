//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from `.env` files, environment variables, and direct builder methods.
//! - Apply managed-runtime detection and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable mapping (delegated to env.rs).
//! - `.env` parsing (delegated to dotenv.rs).
//! - Validation or publishing of the built `Config` (see types/auth.rs and publish.rs).
//!
//! Invariants / Assumptions:
//! - Each layer overwrites only the fields it provides.
//! - Builder methods ignore blank strings so `model_id` and `region` never end up empty.
//! - Credentials are kept verbatim; only an empty credential is ignored.
//! - `use_iam_role` is `None` until some layer provides it; explicit `false` is kept.

use secrecy::{ExposeSecret, SecretString};
use std::path::{Path, PathBuf};

use super::dotenv::apply_dotenv;
use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_DOTENV_PATH, DEFAULT_MODEL_ID, DEFAULT_REGION, MANAGED_RUNTIME_MARKERS,
};
use crate::env::Env;
use crate::types::Config;

/// Configuration loader that builds config from `.env` files, environment
/// variables, and explicit overrides.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    credential: Option<SecretString>,
    model_id: Option<String>,
    region: Option<String>,
    use_iam_role: Option<bool>,
    dotenv_path: PathBuf,
    env: Env,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader reading the real process environment.
    pub fn new() -> Self {
        Self {
            credential: None,
            model_id: None,
            region: None,
            use_iam_role: None,
            dotenv_path: PathBuf::from(DEFAULT_DOTENV_PATH),
            env: Env::real(),
        }
    }

    /// Replace the environment used by `from_env()` and runtime detection.
    pub fn with_env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    /// Override the `.env` path used by `load_dotenv()`.
    pub fn with_dotenv_path(mut self, path: PathBuf) -> Self {
        self.dotenv_path = path;
        self
    }

    /// Load configuration from the `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvIo` if the file exists but cannot be read.
    /// Missing files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let path = self.dotenv_path.clone();
        self.load_dotenv_from(&path)
    }

    /// Load configuration from the `.env` file at `path`.
    pub fn load_dotenv_from(mut self, path: &Path) -> Result<Self, ConfigError> {
        apply_dotenv(&mut self, path)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over `.env` values loaded earlier.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the Bedrock API key.
    pub fn with_credential(self, credential: String) -> Self {
        self.with_secret_credential(SecretString::new(credential.into()))
    }

    /// Set the Bedrock API key from an existing secret.
    ///
    /// The value is not trimmed. An empty secret is ignored.
    pub fn with_secret_credential(mut self, credential: SecretString) -> Self {
        if !credential.expose_secret().is_empty() {
            self.credential = Some(credential);
        }
        self
    }

    /// Set the Bedrock model identifier.
    pub fn with_model_id(mut self, model_id: String) -> Self {
        if !model_id.trim().is_empty() {
            self.model_id = Some(model_id);
        }
        self
    }

    /// Set the AWS region.
    pub fn with_region(mut self, region: String) -> Self {
        if !region.trim().is_empty() {
            self.region = Some(region);
        }
        self
    }

    /// Explicitly enable or disable IAM role authentication.
    ///
    /// `false` is recorded too, and suppresses managed-runtime detection.
    pub fn with_use_iam_role(mut self, use_iam_role: bool) -> Self {
        self.use_iam_role = Some(use_iam_role);
        self
    }

    /// Enable IAM role mode when running inside a managed AWS runtime.
    ///
    /// Only applies when no credential was resolved and no layer provided
    /// the role flag. Presence of `AWS_EXECUTION_ENV` or
    /// `AWS_LAMBDA_FUNCTION_NAME` signals a managed runtime.
    pub fn detect_managed_runtime(mut self) -> Self {
        if self.credential.is_some() || self.use_iam_role.is_some() {
            return self;
        }
        if self.env.any_set(MANAGED_RUNTIME_MARKERS) {
            tracing::info!("managed AWS runtime detected, defaulting to IAM role authentication");
            self.use_iam_role = Some(true);
        }
        self
    }

    /// Check whether authentication is configured: a credential is present
    /// or role mode was explicitly enabled.
    pub fn is_configured(&self) -> bool {
        self.credential.is_some() || self.use_iam_role == Some(true)
    }

    /// The environment this loader reads from.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// The role flag as provided so far, `None` if no layer set it.
    pub fn use_iam_role(&self) -> Option<bool> {
        self.use_iam_role
    }

    /// Build the final configuration, filling unset fields with defaults.
    pub fn build(self) -> Config {
        Config {
            credential: self.credential,
            model_id: self.model_id.unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            region: self.region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
            use_iam_role: self.use_iam_role.unwrap_or(false),
        }
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn set_credential(&mut self, credential: Option<SecretString>) {
        self.credential = credential;
    }

    pub(crate) fn set_model_id(&mut self, model_id: Option<String>) {
        self.model_id = model_id;
    }

    pub(crate) fn set_region(&mut self, region: Option<String>) {
        self.region = region;
    }

    pub(crate) fn set_use_iam_role(&mut self, use_iam_role: Option<bool>) {
        self.use_iam_role = use_iam_role;
    }
}
