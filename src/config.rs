//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/mindwell/config.toml`), then
//! overridden by environment variables. A missing file is not an error:
//! every section has defaults suitable for local development.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::DatabaseConfig;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests running longer than this are answered with 408
    pub request_timeout_secs: u64,
    /// Grace period for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout_secs: 10,
            shutdown_timeout: 10,
        }
    }
}

/// Token signing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub issuer: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_hours: 2,
            issuer: "mindwell".to_string(),
        }
    }
}

/// Reverse geocoding provider settings (HERE)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.geocode.search.hereapi.com/v1".to_string(),
            timeout_secs: 5,
        }
    }
}

/// CORS settings. An empty origin list allows any origin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub geocoding: GeocodingConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

/// Default config location: `<config_dir>/mindwell/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mindwell")
        .join("config.toml")
}

impl AppConfig {
    /// Load configuration from `path`, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
            Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.security.jwt_secret = secret;
        }
        if let Some(hours) = lookup("JWT_EXPIRATION_HOURS").and_then(|v| v.parse().ok()) {
            self.security.jwt_expiration_hours = hours;
        }
        if let Some(key) = lookup("GEOCODING_API_KEY") {
            self.geocoding.api_key = key;
        }
        if let Some(url) = lookup("GEOCODING_BASE_URL") {
            self.geocoding.base_url = url;
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(env) = lookup("APP_ENV") {
            self.environment = Environment::parse(&env);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.security.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Invalid("security.jwt_secret must not be empty".into()));
        }
        if self.security.jwt_expiration_hours <= 0 {
            return Err(ConfigError::Invalid(
                "security.jwt_expiration_hours must be positive".into(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must not be 0".into()));
        }
        Ok(())
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.security.jwt_secret.clone(),
            expiration_hours: self.security.jwt_expiration_hours,
            issuer: self.security.issuer.clone(),
        }
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.security.jwt_expiration_hours, 2);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            environment = "production"

            [server]
            port = 8080

            [geocoding]
            api_key = "abc"
            "#,
        )
        .unwrap();

        assert!(config.environment.is_production());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.request_timeout_secs, 10);
        assert_eq!(config.geocoding.api_key, "abc");
        assert!(config.geocoding.base_url.contains("hereapi.com"));
    }

    #[test]
    fn env_overrides_win() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PORT", "4000"),
            ("JWT_SECRET", "s3cret"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
            ("APP_ENV", "Production"),
        ]);

        let mut config = AppConfig::default();
        config.apply_env_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.security.jwt_secret, "s3cret");
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert!(config.environment.is_production());
    }

    #[test]
    fn unparsable_port_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|k| (k == "PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn empty_secret_is_rejected() {
        let mut config = AppConfig::default();
        config.security.jwt_secret = "  ".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("mindwell-does-not-exist/config.toml");
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
