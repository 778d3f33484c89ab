//! Environment variable loading
//!
//! Helpers for reading tool overrides from the environment.

use crate::error::{KdeConfigError, Result};
use std::env;

/// Load an environment variable as a string
///
/// # Returns
///
/// * `Ok(Some(value))` if the variable is set and non-empty
/// * `Ok(None)` if it is unset or empty
/// * `Err` if it contains invalid UTF-8
pub fn get_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(KdeConfigError::Config(format!(
            "Environment variable {} contains invalid UTF-8",
            key
        ))),
    }
}

/// Load an environment variable, falling back to `default`
pub fn get_env_or(key: &str, default: impl Into<String>) -> Result<String> {
    Ok(get_env(key)?.unwrap_or_else(|| default.into()))
}

/// Build a prefixed environment variable name
///
/// ```
/// use kdeconfig::config::build_env_key;
///
/// assert_eq!(build_env_key("KDECONFIG_", "read_bin"), "KDECONFIG_READ_BIN");
/// ```
pub fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_missing() {
        let result = get_env("KDECONFIG_TEST_MISSING_VAR_12345").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_get_env_empty_is_unset() {
        env::set_var("KDECONFIG_TEST_EMPTY_VAR", "");
        assert!(get_env("KDECONFIG_TEST_EMPTY_VAR").unwrap().is_none());
        env::remove_var("KDECONFIG_TEST_EMPTY_VAR");
    }

    #[test]
    fn test_get_env_or() {
        let result = get_env_or("KDECONFIG_TEST_MISSING_VAR_12345", "kreadconfig5").unwrap();
        assert_eq!(result, "kreadconfig5");

        env::set_var("KDECONFIG_TEST_OR_VAR", "kreadconfig6");
        let result = get_env_or("KDECONFIG_TEST_OR_VAR", "kreadconfig5").unwrap();
        assert_eq!(result, "kreadconfig6");
        env::remove_var("KDECONFIG_TEST_OR_VAR");
    }

    #[test]
    fn test_build_env_key() {
        assert_eq!(build_env_key("KDECONFIG_", "write_bin"), "KDECONFIG_WRITE_BIN");
        assert_eq!(build_env_key("", "read_bin"), "READ_BIN");
    }
}
