//! Error types for configuration loading and validation.
//!
//! Responsibilities:
//! - Define the validation failures for each authentication mode.
//! - Report unreadable `.env` files without echoing their contents.
//!
//! Invariants:
//! - Validation messages list every supported way to supply the missing value.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// API-key mode was selected but no credential was resolved.
    #[error(
        "AWS Bedrock API key is not configured. Provide it in one of these ways:\n  \
         1. Environment variable: export AWS_BEDROCK_API_KEY='your-key'\n  \
         2. .env file: add the line AWS_BEDROCK_API_KEY=your-key\n  \
         3. Code: ConfigLoader::new().with_credential(\"your-key\".to_string())\n\n\
         Or switch to IAM role authentication:\n  \
         1. Environment variable: export USE_IAM_ROLE=true\n  \
         2. .env file: add the line USE_IAM_ROLE=true"
    )]
    MissingCredential,

    /// Role mode was selected but the region resolved to an empty value.
    #[error(
        "AWS region is not configured. IAM role authentication requires a region. \
         Provide it in one of these ways:\n  \
         1. Environment variable: export AWS_REGION='us-east-1'\n  \
         2. .env file: add the line AWS_REGION=us-east-1\n  \
         3. Code: ConfigLoader::new().with_region(\"us-east-1\".to_string())"
    )]
    MissingRegion,

    /// An existing `.env` file could not be read.
    #[error("Failed to read .env file at {path}: {kind}")]
    DotenvIo { path: PathBuf, kind: ErrorKind },
}
