//! Summary rendering for the resolved configuration.
//!
//! Invariants:
//! - The credential itself is never rendered, only whether one is configured.

use anyhow::Result;
use bedrock_auth_config::{AuthMode, Config};
use serde::Serialize;

use crate::args::OutputFormat;

/// What the summary reports about a resolved `Config`.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub auth_mode: AuthMode,
    pub model_id: &'a str,
    pub region: &'a str,
    pub use_iam_role: bool,
    pub credential_configured: bool,
}

impl<'a> From<&'a Config> for Summary<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            auth_mode: config.auth_mode(),
            model_id: &config.model_id,
            region: &config.region,
            use_iam_role: config.use_iam_role,
            credential_configured: config.has_credential(),
        }
    }
}

/// Render `config` in the requested format.
pub fn render(config: &Config, format: OutputFormat) -> Result<String> {
    let summary = Summary::from(config);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => Ok(format!(
            "Authentication mode: {}\nModel ID: {}\nRegion: {}\nIAM role: {}\nAPI key configured: {}",
            summary.auth_mode,
            summary.model_id,
            summary.region,
            summary.use_iam_role,
            summary.credential_configured
        )),
    }
}
