//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Map recognized variable names onto `ConfigLoader` fields.
//! - Share that mapping with the `.env` reader so both sources agree.
//!
//! Invariants:
//! - `AWS_REGION` wins over `AWS_DEFAULT_REGION`; the fallback is read only
//!   when the primary is absent.
//! - `USE_IAM_ROLE` can only switch role mode on; non-truthy values leave it unchanged.
//!   The value is trimmed before the case-insensitive comparison, so ` yes ` counts.
//! - The credential is stored exactly as given; only an empty value counts as absent.
//!   Model ID and region are trimmed and ignored when blank.

use secrecy::SecretString;

use super::builder::ConfigLoader;
use crate::constants::{
    ENV_API_KEY, ENV_DEFAULT_REGION, ENV_MODEL_ID, ENV_REGION, ENV_USE_IAM_ROLE, TRUTHY_VALUES,
};
use crate::env::{Env, non_blank};

/// Read a process environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    Env::real().var_or_none(key)
}

/// Returns `true` for the case-insensitive values `true`, `1` and `yes`.
pub(crate) fn is_truthy(value: &str) -> bool {
    let lowered = value.trim().to_ascii_lowercase();
    TRUTHY_VALUES.contains(&lowered.as_str())
}

/// Apply recognized keys from `lookup` to the loader.
///
/// `lookup` returns the raw value, or `None` for absent keys. Returns the number
/// of loader fields that were assigned.
pub(crate) fn apply_values<F>(loader: &mut ConfigLoader, lookup: F) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied = 0;

    if let Some(key) = lookup(ENV_API_KEY).filter(|key| !key.is_empty()) {
        loader.set_credential(Some(SecretString::new(key.into())));
        applied += 1;
    }
    if let Some(model_id) = lookup(ENV_MODEL_ID).and_then(non_blank) {
        loader.set_model_id(Some(model_id));
        applied += 1;
    }
    let region = lookup(ENV_REGION)
        .and_then(non_blank)
        .or_else(|| lookup(ENV_DEFAULT_REGION).and_then(non_blank));
    if let Some(region) = region {
        loader.set_region(Some(region));
        applied += 1;
    }
    if lookup(ENV_USE_IAM_ROLE).is_some_and(|value| is_truthy(&value)) {
        loader.set_use_iam_role(Some(true));
        applied += 1;
    }

    applied
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over `.env` file values.
pub(crate) fn apply_env(loader: &mut ConfigLoader) {
    let env = loader.env().clone();
    let applied = apply_values(loader, |key| env.var(key));
    tracing::debug!(applied, "applied configuration from environment");
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_truthy_values_are_case_insensitive() {
        for value in ["true", "TRUE", "True", "1", "yes", "YES", " yes "] {
            assert!(is_truthy(value), "{value:?} should be truthy");
        }
    }

    #[test]
    fn test_non_truthy_values() {
        for value in ["false", "0", "no", "on", "y", "", "enabled"] {
            assert!(!is_truthy(value), "{value:?} should not be truthy");
        }
    }

    #[test]
    fn test_apply_values_counts_assigned_fields() {
        let mut loader = ConfigLoader::new();
        let applied = apply_values(&mut loader, |key| match key {
            ENV_MODEL_ID => Some("model".to_string()),
            ENV_USE_IAM_ROLE => Some("no".to_string()),
            _ => None,
        });
        assert_eq!(applied, 1);
        assert_eq!(loader.use_iam_role(), None);
    }

    #[test]
    fn test_apply_values_keeps_credential_verbatim() {
        let mut loader = ConfigLoader::new();
        let applied = apply_values(&mut loader, |key| match key {
            ENV_API_KEY => Some("  spaced key ".to_string()),
            ENV_REGION => Some("  ".to_string()),
            ENV_DEFAULT_REGION => Some(" eu-west-2 ".to_string()),
            _ => None,
        });
        assert_eq!(applied, 2);

        let config = loader.build();
        assert_eq!(
            config.credential.as_ref().map(|c| c.expose_secret().to_string()),
            Some("  spaced key ".to_string())
        );
        assert_eq!(config.region, "eu-west-2");
    }

    #[test]
    fn test_apply_values_ignores_empty_credential() {
        let mut loader = ConfigLoader::new();
        let applied = apply_values(&mut loader, |key| match key {
            ENV_API_KEY => Some(String::new()),
            _ => None,
        });
        assert_eq!(applied, 0);
        assert!(!loader.is_configured());
    }
}
