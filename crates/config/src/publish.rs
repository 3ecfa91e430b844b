//! Publishing resolved configuration to the process environment.
//!
//! Responsibilities:
//! - Plan the variables downstream SDKs read (`EnvPublication::plan`).
//! - Apply a plan to the process environment and announce the active mode.
//!
//! Does NOT handle:
//! - Resolving configuration (see `loader` module).
//!
//! Invariants:
//! - Model ID and region are always published.
//! - `AWS_DEFAULT_REGION` is only written when not already set.
//! - In IAM role mode a preexisting `AWS_BEDROCK_API_KEY` is removed.
//! - `apply()` is the only place in this crate that writes the process environment.
//! - Applying the same plan twice has the same effect as applying it once.

use secrecy::{ExposeSecret, SecretString};

use crate::constants::{ENV_API_KEY, ENV_DEFAULT_REGION, ENV_MODEL_ID, ENV_REGION};
use crate::env::Env;
use crate::types::{AuthMode, Config};

/// A single environment change.
#[derive(Debug, Clone)]
pub enum EnvChange {
    Set { key: &'static str, value: String },
    /// Like `Set`, but the value is redacted from `Debug` output.
    SetSecret {
        key: &'static str,
        value: SecretString,
    },
    Remove { key: &'static str },
}

impl EnvChange {
    /// The variable this change affects.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Set { key, .. } | Self::SetSecret { key, .. } | Self::Remove { key } => *key,
        }
    }
}

/// Environment changes that publish a resolved `Config`.
#[derive(Debug, Clone)]
pub struct EnvPublication {
    changes: Vec<EnvChange>,
    mode: AuthMode,
    region: String,
}

impl EnvPublication {
    /// Plan the changes for `config`, consulting `env` for variables that are
    /// already set.
    pub fn plan(config: &Config, env: &Env) -> Self {
        let mut changes = vec![
            EnvChange::Set {
                key: ENV_MODEL_ID,
                value: config.model_id.clone(),
            },
            EnvChange::Set {
                key: ENV_REGION,
                value: config.region.clone(),
            },
        ];
        if !env.is_set(ENV_DEFAULT_REGION) {
            changes.push(EnvChange::Set {
                key: ENV_DEFAULT_REGION,
                value: config.region.clone(),
            });
        }

        let mode = config.auth_mode();
        match mode {
            AuthMode::ApiKey => {
                if let Some(credential) = &config.credential {
                    changes.push(EnvChange::SetSecret {
                        key: ENV_API_KEY,
                        value: credential.clone(),
                    });
                }
            }
            AuthMode::IamRole => {
                if env.is_set(ENV_API_KEY) {
                    changes.push(EnvChange::Remove { key: ENV_API_KEY });
                }
            }
        }

        Self {
            changes,
            mode,
            region: config.region.clone(),
        }
    }

    /// The planned changes, in application order.
    pub fn changes(&self) -> &[EnvChange] {
        &self.changes
    }

    /// The authentication mode this publication announces.
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Returns the change planned for `key`, if any.
    pub fn change_for(&self, key: &str) -> Option<&EnvChange> {
        self.changes.iter().find(|change| change.key() == key)
    }

    /// Write the planned changes to the process environment.
    ///
    /// Must run during single-threaded startup, before any thread that reads
    /// the environment is spawned.
    pub fn apply(&self) {
        for change in &self.changes {
            // SAFETY: callers publish during single-threaded startup (see above);
            // no other thread reads or writes the environment concurrently.
            unsafe {
                match change {
                    EnvChange::Set { key, value } => std::env::set_var(key, value),
                    EnvChange::SetSecret { key, value } => {
                        std::env::set_var(key, value.expose_secret())
                    }
                    EnvChange::Remove { key } => std::env::remove_var(key),
                }
            }
        }

        match self.mode {
            AuthMode::ApiKey => {
                tracing::info!(
                    mode = %self.mode,
                    "authentication mode: API key (local development)"
                );
            }
            AuthMode::IamRole => {
                tracing::info!(
                    mode = %self.mode,
                    region = %self.region,
                    "authentication mode: IAM role (AWS deployment)"
                );
            }
        }
    }
}
