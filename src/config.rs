//! Runtime configuration loaded from the environment.
//!
//! Lookup order for the credential:
//! 1. OPENAI_API_TOKEN
//! 2. OPENAI_API_KEY

use std::env;
use std::path::PathBuf;

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-5";

/// Default completion service base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default changelog path, relative to the working directory.
pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";

const API_KEY_VARS: [&str; 2] = ["OPENAI_API_TOKEN", "OPENAI_API_KEY"];
const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
const MODEL_VAR: &str = "CHANGESCRIBE_MODEL";

/// Settings passed explicitly to the completion client and pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Completion service credential. `None` makes the service call fail.
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub changelog_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            changelog_path: PathBuf::from(DEFAULT_CHANGELOG),
        }
    }
}

impl Config {
    /// Build a config from environment variables, using defaults for anything unset.
    pub fn from_env() -> Self {
        let api_key = API_KEY_VARS.iter().find_map(|var| non_empty_var(var));

        let base_url = non_empty_var(BASE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = non_empty_var(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            model,
            base_url,
            ..Self::default()
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Values for every variable the config reads.
    fn env_vars(
        token: Option<&'static str>,
        key: Option<&'static str>,
        base_url: Option<&'static str>,
        model: Option<&'static str>,
    ) -> Vec<(&'static str, Option<&'static str>)> {
        vec![
            ("OPENAI_API_TOKEN", token),
            ("OPENAI_API_KEY", key),
            (BASE_URL_VAR, base_url),
            (MODEL_VAR, model),
        ]
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        temp_env::with_vars(env_vars(None, None, None, None), || {
            let config = Config::from_env();
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn test_token_var_takes_precedence() {
        temp_env::with_vars(env_vars(Some("token-a"), Some("token-b"), None, None), || {
            assert_eq!(Config::from_env().api_key.as_deref(), Some("token-a"));
        });
    }

    #[test]
    #[serial]
    fn test_key_var_fallback_and_empty_ignored() {
        temp_env::with_vars(env_vars(Some(""), Some("token-b"), None, None), || {
            assert_eq!(Config::from_env().api_key.as_deref(), Some("token-b"));
        });
    }

    #[test]
    #[serial]
    fn test_base_url_trailing_slash_stripped() {
        let vars = env_vars(None, None, Some("http://localhost:8080/v1/"), Some("gpt-4o"));
        temp_env::with_vars(vars, || {
            let config = Config::from_env();
            assert_eq!(config.base_url, "http://localhost:8080/v1");
            assert_eq!(config.model, "gpt-4o");
        });
    }
}
