//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache TTLs, default paths, and logging. `AppConfig` is the root
//! configuration struct; every section has serde defaults so a minimal (or
//! empty) file is valid.

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches. The
// recommendation table is immutable for the process lifetime, so lookup
// responses can be cached briefly without going stale in any meaningful way.

/// Landing page
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 300;

/// Lookup responses - the table only changes on restart
pub const HTTP_CACHE_LOOKUP_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_LOOKUP_SWR: u32 = 30;

/// Static assets (CSS, JS) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

// Pre-formatted Cache-Control header values (compile-time string concatenation)
pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

pub const CACHE_CONTROL_LOOKUP: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_LOOKUP_MAX_AGE,
    HTTP_CACHE_LOOKUP_SWR
);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Glob pattern for template files
pub const TEMPLATE_GLOB: &str = "templates/**/*";

/// Directory for static files
pub const STATIC_DIR: &str = "static";

/// Environment variable overriding the recommendation CSV path
pub const CSV_PATH_ENV: &str = "RECOMMENDATION_CSV_PATH";

/// Default recommendation CSV, colocated with the service
pub const DEFAULT_CSV_PATH: &str = "data/recommendations.csv";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "skillforge=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default site title shown on the landing page
pub const DEFAULT_SITE_NAME: &str = "SkillForge";

/// Connection drain window during graceful shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Recommendation table source
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
}

/// Where the recommendation table is loaded from.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    /// Path to the recommendations CSV
    #[serde(default = "TableConfig::default_path")]
    pub path: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl TableConfig {
    fn default_path() -> String {
        DEFAULT_CSV_PATH.to_string()
    }

    /// Effective CSV path: the environment override wins over the config file.
    pub fn csv_path(&self) -> String {
        std::env::var(CSV_PATH_ENV).unwrap_or_else(|_| self.path.clone())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Site title shown in the header and page titles.
    #[serde(default = "UiConfig::default_site_name")]
    pub site_name: String,
    /// Version string, populated at runtime
    #[serde(skip_deserializing, default = "UiConfig::default_version")]
    pub version: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: Self::default_site_name(),
            version: Self::default_version(),
        }
    }
}

impl UiConfig {
    fn default_site_name() -> String {
        DEFAULT_SITE_NAME.to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        if config.table.path.is_empty() {
            return Err(ConfigError::Validation(
                "table.path must not be empty".to_string(),
            ));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.table.path, DEFAULT_CSV_PATH);
        assert_eq!(config.ui.site_name, DEFAULT_SITE_NAME);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn sections_override_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [http]
            host = "0.0.0.0"
            port = 9000

            [table]
            path = "fixtures/reco.csv"

            [ui]
            site_name = "Formations"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.table.path, "fixtures/reco.csv");
        assert_eq!(config.ui.site_name, "Formations");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn version_is_populated_at_runtime() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn load_rejects_empty_table_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[table]\npath = \"\"\n").unwrap();
        file.flush().unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn load_rejects_missing_file() {
        let err = AppConfig::load("no/such/config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
