//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `darkpool.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

/// Lower bound for `dashboard.refresh_interval_ms`.
const MIN_REFRESH_INTERVAL_MS: u64 = 100;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Dashboard bundle and refresh settings.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Dashboard configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the compiled dashboard bundle (`index.html`, wasm, css).
    pub assets_dir: String,
    /// Period of the console mirror's refresh cycle, in milliseconds.
    pub refresh_interval_ms: u64,
    /// Log every refreshed card from a headless refresh cycle.
    pub console_mirror: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `darkpool.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("darkpool.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("DARKPOOL_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("DARKPOOL_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("DARKPOOL_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("DARKPOOL_ASSETS_DIR") {
            self.dashboard.assets_dir = val;
        }
        if let Some(val) = var("DARKPOOL_CONSOLE_MIRROR") {
            self.dashboard.console_mirror = matches!(val.as_str(), "1" | "true" | "yes" | "on");
        }
        if let Some(val) = var("DARKPOOL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.dashboard.refresh_interval_ms < MIN_REFRESH_INTERVAL_MS {
            return Err(ConfigError::Validation(format!(
                "refresh_interval_ms must be at least {MIN_REFRESH_INTERVAL_MS}"
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the refresh period as a [`Duration`].
    #[must_use]
    pub fn refresh_period(&self) -> Duration {
        Duration::from_millis(self.dashboard.refresh_interval_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            assets_dir: "dist".to_string(),
            refresh_interval_ms: 5000,
            console_mirror: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "darkpoold=info,darkpool=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use darkpool_app::refresh::REFRESH_PERIOD;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dashboard.assets_dir, "dist");
        assert!(!config.dashboard.console_mirror);
    }

    #[test]
    fn should_default_to_standard_refresh_period() {
        assert_eq!(Config::default().refresh_period(), REFRESH_PERIOD);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [dashboard]
            assets_dir = 'public'
            refresh_interval_ms = 1000
            console_mirror = true

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.dashboard.assets_dir, "public");
        assert_eq!(config.refresh_period(), Duration::from_secs(1));
        assert!(config.dashboard.console_mirror);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [dashboard]
            console_mirror = true
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.dashboard.console_mirror);
        assert_eq!(config.dashboard.refresh_interval_ms, 5000);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_too_short_refresh_interval() {
        let mut config = Config::default();
        config.dashboard.refresh_interval_ms = 10;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_override_bind_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("DARKPOOL_BIND", "127.0.0.1:8080")]));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn should_ignore_unparsable_port_override() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("DARKPOOL_PORT", "not-a-port")]));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_enable_console_mirror_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("DARKPOOL_CONSOLE_MIRROR", "1")]));
        assert!(config.dashboard.console_mirror);
    }

    #[test]
    fn should_prefer_rust_log_over_darkpool_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("DARKPOOL_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_override_assets_dir_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("DARKPOOL_ASSETS_DIR", "/srv/darkpool")]));
        assert_eq!(config.dashboard.assets_dir, "/srv/darkpool");
    }
}
