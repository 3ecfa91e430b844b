//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env`].
//! Tests use [`Env::from_vars()`] backed by a `HashMap`, so resolution can be
//! exercised without `unsafe` calls to [`std::env::set_var`].

use std::collections::HashMap;
use std::fmt;

/// Environment variable reader.
#[derive(Clone, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    ///
    /// Variables not listed are treated as unset.
    pub fn from_vars(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Create an `Env` with no variables set.
    pub fn empty() -> Self {
        Self {
            overrides: Some(HashMap::new()),
        }
    }

    /// Look up a variable. Non-UTF-8 process values are treated as unset.
    pub fn var(&self, name: &str) -> Option<String> {
        match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    /// Returns `true` if the variable is present at all, even if empty.
    pub fn is_set(&self, name: &str) -> bool {
        match &self.overrides {
            Some(map) => map.contains_key(name),
            None => std::env::var_os(name).is_some(),
        }
    }

    /// Look up a variable, returning `None` if unset, empty, or whitespace-only.
    /// Returns the trimmed value.
    pub fn var_or_none(&self, name: &str) -> Option<String> {
        self.var(name).and_then(non_blank)
    }

    /// Returns `true` when any of `names` holds a non-blank value.
    pub fn any_set(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.var_or_none(name).is_some())
    }
}

// Values may hold credentials; only variable names are printed.
impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.overrides {
            None => f.write_str("Env::Real"),
            Some(map) => {
                let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
                keys.sort_unstable();
                f.debug_tuple("Env::Vars").field(&keys).finish()
            }
        }
    }
}

/// Trim `value`, returning `None` when nothing is left.
pub(crate) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}
