//! Configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging output
    pub logging: LoggingConfig,

    /// The service being bootstrapped
    pub service: ServiceConfig,

    /// Provider selection for the discovery bindings
    pub discovery: DiscoveryConfig,

    /// Properties served by the configuration-backed property source
    ///
    /// Keys use the dotted form read by the instance config providers, such
    /// as `instance.app-name` or `cloud.availability-zone`.
    pub properties: BTreeMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily rolling file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Name reported by the application
    pub name: String,

    /// Stop on its own after this many seconds instead of waiting for ctrl-c
    pub run_for_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVICE_NAME.to_string(),
            run_for_secs: None,
        }
    }
}

/// Discovery provider selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Instance config provider bound by the deployment override
    pub instance_config: String,

    /// Discovery client provider
    pub client: String,

    /// Bind a tokio broadcast event bus for discovery events
    pub event_bus: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            instance_config: DEFAULT_OVERRIDE_INSTANCE_CONFIG.to_string(),
            client: DEFAULT_DISCOVERY_CLIENT.to_string(),
            event_bus: false,
        }
    }
}
