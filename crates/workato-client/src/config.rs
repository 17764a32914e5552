//! Client configuration: credential and base URL resolution.
//!
//! Explicit values win, then the process environment, then (for the base URL only)
//! the public Workato API endpoint.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the Workato API token.
pub const API_TOKEN_ENV: &str = "WORKATO_API_TOKEN";

/// Environment variable overriding the Workato API base URL.
pub const BASE_URL_ENV: &str = "WORKATO_BASE_URL";

/// Base URL used when neither an explicit value nor the environment provides one.
pub const DEFAULT_BASE_URL: &str = "https://www.workato.com/api";

/// Immutable credential + base URL pair, created once per process.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_token: SecretString,
    base_url: String,
}

impl ClientConfig {
    /// Build a config from explicit values without consulting the environment.
    pub fn new(api_token: impl Into<String>, base_url: impl Into<String>) -> ClientResult<Self> {
        Self::resolve_with(Some(api_token.into()), Some(base_url.into()), |_| None)
    }

    /// Resolve a config from optional overrides, falling back to the environment.
    pub fn resolve(api_token: Option<String>, base_url: Option<String>) -> ClientResult<Self> {
        Self::resolve_with(api_token, base_url, |key| std::env::var(key).ok())
    }

    /// Resolve a config with a caller-supplied variable lookup.
    pub fn resolve_with<F>(
        api_token: Option<String>,
        base_url: Option<String>,
        lookup: F,
    ) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = api_token
            .filter(|t| !t.is_empty())
            .or_else(|| lookup(API_TOKEN_ENV).filter(|t| !t.is_empty()))
            .ok_or_else(|| {
                ClientError::config_error(format!(
                    "API token is required. Provide it explicitly or set the {} environment variable.",
                    API_TOKEN_ENV
                ))
            })?;

        let base_url = base_url
            .filter(|u| !u.is_empty())
            .or_else(|| lookup(BASE_URL_ENV).filter(|u| !u.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_token: SecretString::from(api_token),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.api_token.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serial_test::serial;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_explicit_values_win() {
        let config = ClientConfig::resolve_with(
            Some("explicit".into()),
            Some("https://explicit.example/api".into()),
            env(&[(API_TOKEN_ENV, "from_env"), (BASE_URL_ENV, "https://env.example")]),
        )
        .unwrap();

        assert_eq!(config.bearer(), "Bearer explicit");
        assert_eq!(config.base_url(), "https://explicit.example/api");
    }

    #[test]
    fn test_environment_fallback() {
        let config = ClientConfig::resolve_with(
            None,
            None,
            env(&[
                (API_TOKEN_ENV, "from_env"),
                (BASE_URL_ENV, "https://test.workato.com/api"),
            ]),
        )
        .unwrap();

        assert_eq!(config.bearer(), "Bearer from_env");
        assert_eq!(config.base_url(), "https://test.workato.com/api");
    }

    #[test]
    fn test_default_base_url() {
        let config =
            ClientConfig::resolve_with(None, None, env(&[(API_TOKEN_ENV, "token")])).unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("token", "https://www.workato.com/api/").unwrap();
        assert_eq!(config.base_url(), "https://www.workato.com/api");
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let err = ClientConfig::resolve_with(None, None, env(&[])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
        assert!(err.to_string().contains(API_TOKEN_ENV));
    }

    #[test]
    fn test_empty_token_is_config_error() {
        let err = ClientConfig::resolve_with(Some(String::new()), None, env(&[(API_TOKEN_ENV, "")]))
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("super-secret-token", DEFAULT_BASE_URL).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-token"));
    }

    #[test]
    #[serial]
    fn test_resolve_reads_process_environment() {
        std::env::set_var(API_TOKEN_ENV, "process_token");
        std::env::remove_var(BASE_URL_ENV);

        let config = ClientConfig::resolve(None, None).unwrap();
        assert_eq!(config.bearer(), "Bearer process_token");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        std::env::remove_var(API_TOKEN_ENV);
        assert!(ClientConfig::resolve(None, None).is_err());
    }
}
