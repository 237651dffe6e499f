//! OpenRouteService client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Configuration shared by the geocoding and matrix clients
#[derive(Clone, Deserialize)]
pub struct OpenRouteConfig {
    /// Full URL of the Pelias geocoding search endpoint
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,

    /// Full URL of the matrix endpoint, including the routing profile
    #[serde(default = "default_matrix_url")]
    pub matrix_url: String,

    /// API key (sensitive - uses `SecretString`)
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pelias layer filter for geocoding queries
    #[serde(default = "default_geocode_layers")]
    pub geocode_layers: String,
}

impl std::fmt::Debug for OpenRouteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouteConfig")
            .field("geocode_url", &self.geocode_url)
            .field("matrix_url", &self.matrix_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("geocode_layers", &self.geocode_layers)
            .finish()
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

impl OpenRouteConfig {
    /// Create a configuration for the public OpenRouteService endpoints
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            geocode_url: default_geocode_url(),
            matrix_url: default_matrix_url(),
            api_key: SecretString::from(api_key.into()),
            timeout_secs: default_timeout_secs(),
            geocode_layers: default_geocode_layers(),
        }
    }

    /// Create a configuration pointing at a mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            geocode_url: format!("{base_url}/geocode/search"),
            matrix_url: format!("{base_url}/v2/matrix/driving-car"),
            timeout_secs: 5,
            ..Self::new("test-api-key")
        }
    }

    /// Get the API key as a string reference
    #[must_use]
    pub fn api_key_str(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key_str().trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.geocode_url.is_empty() {
            return Err("geocode_url must not be empty".to_string());
        }

        if self.matrix_url.is_empty() {
            return Err("matrix_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
