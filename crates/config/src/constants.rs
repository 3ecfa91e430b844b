//! Centralized constants for the bedrock-auth workspace.
//!
//! Variable names are shared by the environment reader, the `.env` reader,
//! and the publisher, so each name is defined exactly once here.

// =============================================================================
// Recognized Variables
// =============================================================================

/// Static Bedrock API key (api-key mode).
pub const ENV_API_KEY: &str = "AWS_BEDROCK_API_KEY";

/// Bedrock model identifier.
pub const ENV_MODEL_ID: &str = "AWS_BEDROCK_MODEL_ID";

/// Primary region variable.
pub const ENV_REGION: &str = "AWS_REGION";

/// Fallback region variable, consulted only when `AWS_REGION` is absent.
pub const ENV_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

/// Explicit request for IAM role authentication.
pub const ENV_USE_IAM_ROLE: &str = "USE_IAM_ROLE";

// =============================================================================
// Managed Runtime Markers
// =============================================================================

/// Set by AWS managed runtimes (e.g. `AWS_Lambda_python3.12`).
pub const ENV_EXECUTION_ENV: &str = "AWS_EXECUTION_ENV";

/// Set by AWS Lambda to the running function's name.
pub const ENV_LAMBDA_FUNCTION_NAME: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Markers whose presence means the process runs inside a managed runtime.
pub const MANAGED_RUNTIME_MARKERS: &[&str] = &[ENV_EXECUTION_ENV, ENV_LAMBDA_FUNCTION_NAME];

// =============================================================================
// Defaults
// =============================================================================

/// Default Bedrock model identifier.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Default AWS region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default `.env` path, relative to the working directory.
pub const DEFAULT_DOTENV_PATH: &str = ".env";

/// Lowercased values of `USE_IAM_ROLE` that enable role mode.
pub const TRUTHY_VALUES: &[&str] = &["true", "1", "yes"];
