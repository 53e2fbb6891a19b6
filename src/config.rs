//! Runtime configuration read from the environment.

use secrecy::SecretString;

use crate::error::ConfigError;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug)]
pub struct AppConfig {
    pub openai_api_key: Option<SecretString>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub github_token: Option<SecretString>,
    pub github_username: Option<String>,
    pub github_api_url: String,
    pub bind_addr: String,
}

/// Credentials needed to create a repository.
#[derive(Debug)]
pub struct GithubCredentials<'a> {
    pub token: &'a SecretString,
    pub username: &'a str,
}

/// Credentials needed to call the completion API.
#[derive(Debug)]
pub struct OpenAiCredentials<'a> {
    pub api_key: &'a SecretString,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            openai_api_key: get("OPENAI_API_KEY").map(SecretString::from),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            github_token: get("GITHUB_TOKEN").map(SecretString::from),
            github_username: get("GITHUB_USERNAME"),
            github_api_url: get("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }

    pub fn github(&self) -> Result<GithubCredentials<'_>, ConfigError> {
        let token = self
            .github_token
            .as_ref()
            .ok_or(ConfigError::MissingEnvVar("GITHUB_TOKEN"))?;
        let username = self
            .github_username
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar("GITHUB_USERNAME"))?;
        Ok(GithubCredentials { token, username })
    }

    pub fn openai(&self) -> Result<OpenAiCredentials<'_>, ConfigError> {
        let api_key = self
            .openai_api_key
            .as_ref()
            .ok_or(ConfigError::MissingEnvVar("OPENAI_API_KEY"))?;
        Ok(OpenAiCredentials { api_key })
    }

    /// Emit a warning for every credential that is missing.
    pub fn log_gaps(&self) {
        if let Err(e) = self.openai() {
            tracing::warn!(error = %e, "chat completions disabled");
        }
        if let Err(e) = self.github() {
            tracing::warn!(error = %e, "repository commands disabled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::default();
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.github_api_url, DEFAULT_GITHUB_API_URL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(config.openai().is_err());
        assert!(config.github().is_err());
    }

    #[test]
    fn blank_values_are_unset() {
        let config = config_from(&[("OPENAI_API_KEY", "   "), ("OPENAI_MODEL", "")]);
        assert!(config.openai().is_err());
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn github_needs_token_and_username() {
        let config = config_from(&[("GITHUB_TOKEN", "ghp_x")]);
        assert!(matches!(
            config.github(),
            Err(ConfigError::MissingEnvVar("GITHUB_USERNAME"))
        ));

        let config = config_from(&[("GITHUB_TOKEN", "ghp_x"), ("GITHUB_USERNAME", "octo")]);
        let creds = config.github().unwrap();
        assert_eq!(creds.username, "octo");
        assert_eq!(creds.token.expose_secret(), "ghp_x");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = config_from(&[("OPENAI_API_KEY", "sk-very-secret")]);
        assert!(!format!("{config:?}").contains("sk-very-secret"));
    }
}
