//! Client configuration and HTTP transport construction

use std::fmt;
use std::time::Duration;

use super::error::ApiError;

pub const INSTANCE_URL_ENV: &str = "ADVERITY_INSTANCE_URL";
pub const AUTH_TOKEN_ENV: &str = "ADVERITY_AUTH_TOKEN";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct ClientConfig {
    pub instance_url: String,
    pub auth_token: String,
    /// Total time allowed for one request, including reading the body.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(instance_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into(),
            auth_token: auth_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the instance URL and token from `ADVERITY_INSTANCE_URL` and
    /// `ADVERITY_AUTH_TOKEN`. Empty values count as missing.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(require_env(INSTANCE_URL_ENV)?, require_env(AUTH_TOKEN_ENV)?))
    }

    /// Fill unset values from the environment, keeping explicit ones.
    pub fn from_optional(
        instance_url: Option<String>,
        auth_token: Option<String>,
    ) -> Result<Self, ApiError> {
        let instance_url = match instance_url.filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => require_env(INSTANCE_URL_ENV)?,
        };
        let auth_token = match auth_token.filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => require_env(AUTH_TOKEN_ENV)?,
        };
        Ok(Self::new(instance_url, auth_token))
    }

    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(self.timeout)
            .build()?;
        Ok(client)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("instance_url", &self.instance_url)
            .field("auth_token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn require_env(name: &str) -> Result<String, ApiError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::Configuration(format!(
            "{} is not set or empty",
            name
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(INSTANCE_URL_ENV);
        std::env::remove_var(AUTH_TOKEN_ENV);
    }

    #[test]
    fn default_timeout_is_thirty_seconds() {
        let config = ClientConfig::new("https://acme.datatap.adverity.com", "secret");
        assert_eq!(config.timeout.as_secs(), 30);

        let config = config.with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout.as_secs(), 5);
    }

    #[test]
    fn debug_output_masks_token() {
        let config = ClientConfig::new("https://acme.datatap.adverity.com", "secret-token");
        let printed = format!("{:?}", config);
        assert!(printed.contains("acme.datatap.adverity.com"));
        assert!(!printed.contains("secret-token"));
    }

    #[test]
    #[serial]
    fn from_env_reads_both_variables() {
        std::env::set_var(INSTANCE_URL_ENV, "https://acme.datatap.adverity.com");
        std::env::set_var(AUTH_TOKEN_ENV, "secret");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.instance_url, "https://acme.datatap.adverity.com");
        assert_eq!(config.auth_token, "secret");

        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_requires_instance_url() {
        clear_env();
        std::env::set_var(AUTH_TOKEN_ENV, "secret");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
        assert!(err.to_string().contains(INSTANCE_URL_ENV));

        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_treats_empty_token_as_missing() {
        std::env::set_var(INSTANCE_URL_ENV, "https://acme.datatap.adverity.com");
        std::env::set_var(AUTH_TOKEN_ENV, "");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(AUTH_TOKEN_ENV));

        clear_env();
    }

    #[test]
    #[serial]
    fn explicit_values_take_precedence_over_env() {
        std::env::set_var(INSTANCE_URL_ENV, "https://env.datatap.adverity.com");
        std::env::set_var(AUTH_TOKEN_ENV, "env-token");

        let config =
            ClientConfig::from_optional(Some("https://explicit.example.com".to_string()), None)
                .unwrap();
        assert_eq!(config.instance_url, "https://explicit.example.com");
        assert_eq!(config.auth_token, "env-token");

        clear_env();
    }
}
