//! # Client configuration (`splitpro.toml`)
//!
//! The workspace root carries a `splitpro.toml` that is embedded here and
//! parsed at startup by [`ClientConfig::load`]. Two environment variables,
//! read at compile time because the browser has no process environment,
//! override the file:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `SPLITPRO_API_BASE_URL` | `api.base_url` |
//! | `SPLITPRO_LOG` | `log.level` |
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""            # empty = same origin as the page
//! history_page_size = 20
//! export_page_size = 500
//!
//! [ui]
//! notification_timeout_secs = 5
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

const EMBEDDED_CONFIG: &str = include_str!("../../../splitpro.toml");

/// Top-level configuration stored in `splitpro.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Where the REST API lives and how much of it to fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute origin of the API server. Empty means "same origin as the
    /// page" in the browser and `http://localhost:8080` natively.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_history_page_size")]
    pub history_page_size: u32,
    #[serde(default = "default_export_page_size")]
    pub export_page_size: u32,
}

fn default_history_page_size() -> u32 {
    20
}

fn default_export_page_size() -> u32 {
    500
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            history_page_size: default_history_page_size(),
            export_page_size: default_export_page_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Seconds before a notification dismisses itself.
    #[serde(default = "default_notification_timeout")]
    pub notification_timeout_secs: u32,
}

fn default_notification_timeout() -> u32 {
    5
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_timeout_secs: default_notification_timeout(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "splitpro.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Builder method to point the client at another API origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Load the embedded config and apply compile-time overrides.
    ///
    /// A malformed embedded file is logged and replaced by the defaults so the
    /// app still starts.
    pub fn load() -> Self {
        let config = Self::from_toml(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            tracing::error!("Invalid {}: {}", Self::filename(), e);
            Self::default()
        });
        config.with_overrides(
            option_env!("SPLITPRO_API_BASE_URL"),
            option_env!("SPLITPRO_LOG"),
        )
    }

    fn with_overrides(mut self, base_url: Option<&str>, level: Option<&str>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.log.level = level.trim().to_string();
        }
        self
    }

    /// The configured log level, INFO when the name is not recognised.
    pub fn log_level(&self) -> tracing::Level {
        self.log
            .level
            .parse::<tracing::Level>()
            .unwrap_or(tracing::Level::INFO)
    }

    /// Notification lifetime as a `Duration`.
    pub fn notification_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.ui.notification_timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.history_page_size, 20);
        assert_eq!(config.ui.notification_timeout_secs, 5);
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://split.example.com"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://split.example.com");
        assert_eq!(config.api.export_page_size, 500);
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let mut config = ClientConfig::default();
        config.log.level = "chatty".to_string();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_overrides_ignore_blank_values() {
        let config = ClientConfig::default()
            .with_base_url("http://a")
            .with_overrides(Some("  "), Some("warn"));
        assert_eq!(config.api.base_url, "http://a");
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_embedded_config_parses() {
        assert!(ClientConfig::from_toml(EMBEDDED_CONFIG).is_ok());
    }
}
