//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate flags into `SetupOptions` for the resolver.
//!
//! Non-responsibilities:
//! - Does not read environment variables; the resolver's environment layer does that
//!   so precedence stays explicit > environment > `.env`.

use bedrock_auth_config::SetupOptions;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bedrock-auth")]
#[command(about = "Resolve AWS Bedrock authentication settings for this process", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  bedrock-auth\n  bedrock-auth --check\n  bedrock-auth --api-key $KEY --region eu-west-1 --output json\n  bedrock-auth --use-iam-role true --no-dotenv\n"
)]
pub struct Cli {
    /// Bedrock API key (overrides AWS_BEDROCK_API_KEY and .env)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Bedrock model identifier
    #[arg(long, value_name = "ID")]
    pub model_id: Option<String>,

    /// AWS region
    #[arg(long)]
    pub region: Option<String>,

    /// Explicitly enable or disable IAM role authentication.
    ///
    /// `false` also disables Lambda auto-detection.
    #[arg(long, value_name = "BOOL")]
    pub use_iam_role: Option<bool>,

    /// Do not read the .env file
    #[arg(long)]
    pub no_dotenv: bool,

    /// Do not read configuration from environment variables
    #[arg(long)]
    pub no_env: bool,

    /// Path to the .env file (default: .env in the working directory)
    #[arg(long, value_name = "FILE")]
    pub dotenv: Option<PathBuf>,

    /// Validate the resolved configuration and exit non-zero if incomplete
    #[arg(long)]
    pub check: bool,

    /// Summary format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Build resolver options from the parsed flags.
    pub fn setup_options(&self) -> SetupOptions {
        let mut options = SetupOptions::default();
        if let Some(ref key) = self.api_key {
            options = options.with_credential(key.clone());
        }
        if let Some(ref model_id) = self.model_id {
            options = options.with_model_id(model_id.clone());
        }
        if let Some(ref region) = self.region {
            options = options.with_region(region.clone());
        }
        if let Some(use_iam_role) = self.use_iam_role {
            options = options.with_use_iam_role(use_iam_role);
        }
        if let Some(ref path) = self.dotenv {
            options = options.with_dotenv_path(path.clone());
        }
        if self.no_dotenv {
            options = options.without_dotenv();
        }
        if self.no_env {
            options = options.without_env();
        }
        options
    }
}
