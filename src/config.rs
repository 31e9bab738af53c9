use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub astrologize: AstrologizeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8100
}

/// Upstream planetary-position API. With no base URL configured the
/// service runs offline and always serves the static fallback chart.
#[derive(Debug, Deserialize, Clone)]
pub struct AstrologizeConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for AstrologizeConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" for development consoles, "json" for production.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration: optional TOML file (explicit path or
    /// `config/default.toml`), then `ALCHM__`-prefixed environment
    /// overrides (e.g. `ALCHM__SERVER__PORT=9000`).
    pub fn load(path: Option<String>) -> Result<Config, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = match path {
            Some(path) => builder.add_source(File::with_name(&path)),
            None => builder.add_source(File::with_name("config/default").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("ALCHM")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if self.astrologize.timeout_secs == 0 {
            return Err("astrologize.timeout_secs must be non-zero".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "logging.format must be 'pretty' or 'json', got '{}'",
                self.logging.format
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8100);
        assert!(config.astrologize.base_url.is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn bad_log_format_fails_validation() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
