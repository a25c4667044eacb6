//! Configuration management
//!
//! Layered configuration backed by Figment: built-in defaults, then a TOML
//! file, then `BEACON__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::{AppConfig, DiscoveryConfig, LoggingConfig, ServiceConfig};
