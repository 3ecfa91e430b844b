//! Authentication configuration for AWS Bedrock clients.
//!
//! This crate resolves, at process startup, whether an inference client
//! authenticates with a static API key or with an ambient IAM role. Settings
//! come from explicit values, environment variables, and a `.env` file, in
//! that order of precedence, and can be published back to the process
//! environment for SDKs that read it.

pub mod constants;
mod env;
mod loader;
mod publish;
mod startup;
pub mod types;

pub use env::Env;
pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use publish::{EnvChange, EnvPublication};
pub use startup::{
    SetupOptions, ensure_configured, ensure_configured_with, setup_configuration,
    setup_configuration_with,
};
pub use types::{AuthMode, Config};
