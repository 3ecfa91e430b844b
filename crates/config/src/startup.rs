//! Startup entry points that run the full resolution pipeline.
//!
//! Responsibilities:
//! - `setup_configuration`: merge `.env`, environment, and explicit values, detect
//!   managed runtimes, and publish.
//! - `ensure_configured`: fill in an unconfigured loader from `.env` and the
//!   environment, publish, then fail fast on an incomplete configuration.
//!
//! Invariants:
//! - Precedence is explicit > environment > `.env` > defaults.
//! - The `*_with` variants never write the process environment; they return the
//!   planned `EnvPublication` for the caller to apply.

use secrecy::SecretString;
use std::path::PathBuf;

use crate::env::Env;
use crate::loader::{ConfigError, ConfigLoader};
use crate::publish::EnvPublication;
use crate::types::Config;

/// Explicit values and source switches for [`setup_configuration`].
#[derive(Debug, Clone)]
pub struct SetupOptions {
    pub credential: Option<SecretString>,
    pub model_id: Option<String>,
    pub region: Option<String>,
    /// `Some(false)` is an explicit choice and disables managed-runtime detection.
    pub use_iam_role: Option<bool>,
    /// Read the `.env` file.
    pub use_dotenv: bool,
    /// Read environment variables.
    pub use_env: bool,
    /// `.env` location; defaults to `.env` in the working directory.
    pub dotenv_path: Option<PathBuf>,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            credential: None,
            model_id: None,
            region: None,
            use_iam_role: None,
            use_dotenv: true,
            use_env: true,
            dotenv_path: None,
        }
    }
}

impl SetupOptions {
    pub fn with_credential(mut self, credential: String) -> Self {
        self.credential = Some(SecretString::new(credential.into()));
        self
    }

    pub fn with_model_id(mut self, model_id: String) -> Self {
        self.model_id = Some(model_id);
        self
    }

    pub fn with_region(mut self, region: String) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_use_iam_role(mut self, use_iam_role: bool) -> Self {
        self.use_iam_role = Some(use_iam_role);
        self
    }

    pub fn with_dotenv_path(mut self, path: PathBuf) -> Self {
        self.dotenv_path = Some(path);
        self
    }

    /// Skip the `.env` file.
    pub fn without_dotenv(mut self) -> Self {
        self.use_dotenv = false;
        self
    }

    /// Skip environment variables.
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }
}

/// Resolve configuration and publish it to the process environment.
///
/// # Errors
///
/// Returns `ConfigError::DotenvIo` if the `.env` file exists but cannot be read.
pub fn setup_configuration(options: SetupOptions) -> Result<Config, ConfigError> {
    let (config, publication) = setup_configuration_with(options, Env::real())?;
    publication.apply();
    Ok(config)
}

/// Resolve configuration against `env` without writing the process environment.
pub fn setup_configuration_with(
    options: SetupOptions,
    env: Env,
) -> Result<(Config, EnvPublication), ConfigError> {
    let mut loader = ConfigLoader::new().with_env(env);
    if let Some(path) = options.dotenv_path {
        loader = loader.with_dotenv_path(path);
    }

    // Least-priority first: each layer overwrites the fields it provides.
    if options.use_dotenv {
        loader = loader.load_dotenv()?;
    }
    if options.use_env {
        loader = loader.from_env();
    }
    if let Some(credential) = options.credential {
        loader = loader.with_secret_credential(credential);
    }
    if let Some(model_id) = options.model_id {
        loader = loader.with_model_id(model_id);
    }
    if let Some(region) = options.region {
        loader = loader.with_region(region);
    }
    if let Some(use_iam_role) = options.use_iam_role {
        loader = loader.with_use_iam_role(use_iam_role);
    }

    Ok(finish(loader.detect_managed_runtime()))
}

/// Make sure authentication is configured, then validate.
///
/// An unconfigured loader (no credential, role mode not enabled) is filled from
/// the `.env` file and then the environment; those layers overwrite any fields
/// already set on it. The result is published before validation runs. A loader
/// that is already configured is built and validated as-is.
///
/// # Errors
///
/// - `ConfigError::MissingCredential` / `ConfigError::MissingRegion` from validation.
/// - `ConfigError::DotenvIo` if the `.env` file exists but cannot be read.
pub fn ensure_configured(loader: ConfigLoader) -> Result<Config, ConfigError> {
    let (config, publication) = fill_unconfigured(loader)?;
    if let Some(publication) = &publication {
        publication.apply();
    }
    config.validate()?;
    Ok(config)
}

/// Like [`ensure_configured`], but returns the publication instead of applying it.
///
/// The publication is `None` when the loader was already configured.
pub fn ensure_configured_with(
    loader: ConfigLoader,
) -> Result<(Config, Option<EnvPublication>), ConfigError> {
    let (config, publication) = fill_unconfigured(loader)?;
    config.validate()?;
    Ok((config, publication))
}

fn fill_unconfigured(
    loader: ConfigLoader,
) -> Result<(Config, Option<EnvPublication>), ConfigError> {
    if loader.is_configured() {
        return Ok((loader.build(), None));
    }

    let loader = loader.load_dotenv()?.from_env().detect_managed_runtime();
    let (config, publication) = finish(loader);
    Ok((config, Some(publication)))
}

fn finish(loader: ConfigLoader) -> (Config, EnvPublication) {
    let env = loader.env().clone();
    let config = loader.build();
    let publication = config.publication(&env);
    (config, publication)
}
