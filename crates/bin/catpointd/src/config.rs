//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `catpoint.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::collections::BTreeSet;

use serde::Deserialize;

use catpoint_adapter_http_axum::api::camera::DEFAULT_MAX_FRAME_BYTES;
use catpoint_adapter_virtual::VirtualCameraConfig;
use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::{Sensor, SensorType};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Event bus settings.
    pub events: EventsConfig,
    /// Virtual camera settings.
    pub camera: VirtualCameraConfig,
    /// Sensors tracked from startup.
    pub sensors: Vec<SensorConfig>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Largest camera frame accepted over HTTP, in bytes.
    pub max_frame_bytes: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Event bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Events buffered per subscriber before the slowest one lags.
    pub capacity: usize,
}

/// One `[[sensors]]` entry.
#[derive(Debug, Deserialize)]
pub struct SensorConfig {
    pub name: String,
    pub sensor_type: SensorType,
}

impl Config {
    /// Load configuration from `catpoint.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("catpoint.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
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

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("CATPOINT_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("CATPOINT_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("CATPOINT_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("CATPOINT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.server.max_frame_bytes == 0 {
            return Err(ConfigError::Validation(
                "max frame size must be non-zero".to_string(),
            ));
        }
        if self.events.capacity == 0 {
            return Err(ConfigError::Validation(
                "event capacity must be non-zero".to_string(),
            ));
        }
        if !self.camera.is_valid() {
            return Err(ConfigError::Validation(
                "camera confidence must be within 0-100".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for sensor in self.sensors()? {
            let key = sensor.key();
            if !seen.insert(key.clone()) {
                return Err(ConfigError::Validation(format!("duplicate sensor {key}")));
            }
        }
        Ok(())
    }

    /// Build the configured sensors, all inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if a sensor name is blank.
    pub fn sensors(&self) -> Result<Vec<Sensor>, ConfigError> {
        self.sensors
            .iter()
            .map(|entry| {
                Sensor::builder()
                    .name(entry.name.clone())
                    .sensor_type(entry.sensor_type)
                    .build()
                    .map_err(ConfigError::Sensor)
            })
            .collect()
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "catpointd=info,catpoint=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { capacity: 256 }
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
    /// A configured sensor is not a valid sensor.
    #[error("invalid sensor in configuration")]
    Sensor(#[source] CatpointError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
