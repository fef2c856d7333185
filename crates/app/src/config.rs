//! Client configuration: TOML with a build-time API override.
//!
//! The browser client embeds `catalyst.toml` at build time. Every field has a
//! default matching the historical constants, so an empty file is valid.

use std::time::Duration;

use catalyst_domain::dashboard::CRITICAL_ALERT_LIMIT;
use serde::Deserialize;

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Risk API location.
    pub api: ApiConfig,
    /// Sign-in form behaviour.
    pub login: LoginConfig,
    /// Dashboard page settings.
    pub dashboard: DashboardConfig,
}

/// Risk API location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin the two GET endpoints live under (no trailing slash needed).
    pub base_url: String,
}

/// Sign-in form settings.
///
/// The credentials are demo values prefilled into the form. They are never
/// checked or transmitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Artificial wait of the simulated sign-in, in milliseconds.
    pub delay_ms: u64,
    pub email: String,
    pub password: String,
}

/// Dashboard page settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Maximum number of customers listed under "Critical Alerts".
    pub critical_alert_limit: usize,
}

impl ClientConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the API origin when `base_url` is set and non-blank.
    #[must_use]
    pub fn with_api_base(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api.base_url.as_str();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "api.base_url must be an http(s) URL, got {base:?}"
            )));
        }
        if self.dashboard.critical_alert_limit == 0 {
            return Err(ConfigError::Validation(
                "dashboard.critical_alert_limit must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Join `path` onto the API origin.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Wait applied by the simulated sign-in.
    #[must_use]
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login.delay_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            email: "risk.officer@barclays.com".to_string(),
            password: "securepassword".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            critical_alert_limit: CRITICAL_ALERT_LIMIT,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse client config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid client configuration: {0}")]
    Validation(String),
}
