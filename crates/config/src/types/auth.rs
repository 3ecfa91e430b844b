//! Authentication types for Bedrock configuration.
//!
//! Responsibilities:
//! - Hold the resolved credential, model, region, and role flag.
//! - Derive the authentication mode and validate the fields it requires.
//!
//! Does NOT handle:
//! - Actual authentication against AWS.
//!
//! Invariants:
//! - The mode is a pure function of the credential and the role flag.
//! - An explicit role flag wins over a present credential.
//! - Validation never mutates the configuration.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_MODEL_ID, DEFAULT_REGION};
use crate::env::Env;
use crate::loader::ConfigError;
use crate::publish::EnvPublication;

/// How the inference client authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Static API key, typically for local development.
    ApiKey,
    /// Ambient IAM role credentials, typically inside AWS.
    IamRole,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::IamRole => "iam_role",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved Bedrock authentication configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Static Bedrock API key, if one was provided.
    pub credential: Option<SecretString>,
    /// Bedrock model identifier.
    pub model_id: String,
    /// AWS region.
    pub region: String,
    /// Explicit request for IAM role authentication.
    pub use_iam_role: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            region: DEFAULT_REGION.to_string(),
            use_iam_role: false,
        }
    }
}

impl Config {
    /// Restore every field to its built-in default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` when a credential is present and not empty.
    pub fn has_credential(&self) -> bool {
        self.credential
            .as_ref()
            .is_some_and(|c| !c.expose_secret().is_empty())
    }

    /// The authentication mode implied by the current fields.
    ///
    /// A present credential selects api-key mode unless role mode was requested.
    pub fn auth_mode(&self) -> AuthMode {
        if self.credential.is_some() && !self.use_iam_role {
            AuthMode::ApiKey
        } else {
            AuthMode::IamRole
        }
    }

    /// Check whether authentication is configured: a credential is present
    /// or role mode is enabled.
    pub fn is_configured(&self) -> bool {
        self.credential.is_some() || self.use_iam_role
    }

    /// Validate the fields required by the current authentication mode.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingCredential` in api-key mode with an empty credential.
    /// - `ConfigError::MissingRegion` in role mode with an empty region.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.auth_mode() {
            AuthMode::ApiKey if !self.has_credential() => Err(ConfigError::MissingCredential),
            AuthMode::IamRole if self.region.trim().is_empty() => Err(ConfigError::MissingRegion),
            _ => Ok(()),
        }
    }

    /// Plan the environment changes that publish this configuration.
    ///
    /// `env` is consulted for variables that are already set; nothing is written.
    pub fn publication(&self, env: &Env) -> EnvPublication {
        EnvPublication::plan(self, env)
    }
}
