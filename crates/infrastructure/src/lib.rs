//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! OpenRouteService clients, loads configuration, and provides the
//! TOML-backed message catalog.

pub mod adapters;
pub mod config;
pub mod messages;

pub use adapters::*;
pub use self::config::{AppConfig, LogFormat, LoggingConfig, MessagesConfig, OpenRouteAppConfig};
pub use messages::{MessageCatalogError, TomlMessageCatalog};
