//! Application configuration
//!
//! Loaded from built-in defaults, an optional TOML file, and `CO2_`
//! environment variables, in increasing order of precedence. Nested keys use
//! a double underscore, e.g. `CO2_OPENROUTE__API_KEY`.

use std::fmt;
use std::path::{Path, PathBuf};

use application::ApplicationError;
use integration_openroute::OpenRouteConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CO2";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenRouteService endpoints and credentials
    #[serde(default)]
    pub openroute: OpenRouteAppConfig,

    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Message bundle configuration
    #[serde(default)]
    pub messages: MessagesConfig,
}

/// OpenRouteService configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenRouteAppConfig {
    /// Pelias geocoding search endpoint
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,

    /// Matrix endpoint including the routing profile
    #[serde(default = "default_matrix_url")]
    pub matrix_url: String,

    /// API key
    /// Sensitive - uses `SecretString` for zeroization
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pelias layer filter (default: locality)
    #[serde(default = "default_geocode_layers")]
    pub geocode_layers: String,
}

impl fmt::Debug for OpenRouteAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouteAppConfig")
            .field("geocode_url", &self.geocode_url)
            .field("matrix_url", &self.matrix_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("geocode_layers", &self.geocode_layers)
            .finish()
    }
}

impl Default for OpenRouteAppConfig {
    fn default() -> Self {
        Self {
            geocode_url: default_geocode_url(),
            matrix_url: default_matrix_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            geocode_layers: default_geocode_layers(),
        }
    }
}

fn default_geocode_url() -> String {
    "https://api.openrouteservice.org/geocode/search".to_string()
}

fn default_matrix_url() -> String {
    "https://api.openrouteservice.org/v2/matrix/driving-car".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_geocode_layers() -> String {
    "locality".to_string()
}

impl OpenRouteAppConfig {
    /// Convert to the client configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the API key is missing or
    /// the resulting client configuration is invalid.
    pub fn to_openroute_config(&self) -> Result<OpenRouteConfig, ApplicationError> {
        let api_key = self
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| {
                ApplicationError::Configuration(format!(
                    "openroute.api_key is required (set {ENV_PREFIX}_OPENROUTE__API_KEY)"
                ))
            })?;

        let config = OpenRouteConfig {
            geocode_url: self.geocode_url.clone(),
            matrix_url: self.matrix_url.clone(),
            api_key: api_key.clone(),
            timeout_secs: self.timeout_secs,
            geocode_layers: self.geocode_layers.clone(),
        };
        config
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("openroute.{e}")))?;
        Ok(config)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format: "text" or "json"
    #[serde(default)]
    pub format: LogFormat,
}

/// Message bundle configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// TOML bundle replacing the built-in messages
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment and an optional file
    ///
    /// Without `path`, `config.toml` in the working directory is used if it
    /// exists. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(path, None)
    }

    fn build(
        path: Option<&Path>,
        env_source: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("openroute.timeout_secs", default_timeout_secs())?
            .set_default("logging.format", "text")?
            .add_source(file)
            // Override with environment variables (e.g., CO2_OPENROUTE__API_KEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env_source),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` describing the first problem.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.openroute.to_openroute_config().map(|_| ())
    }
}
