//! Infrastructure layer constants
//!
//! Capability names live in `beacon_domain::constants`; provider defaults
//! live in `beacon_providers::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "beacon.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "beacon";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BEACON";

/// Separator between nested keys in configuration environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "BEACON_LOG";

/// Default log file stem when writing to a rolling file
pub const DEFAULT_LOG_FILE_STEM: &str = "beacon";

// ============================================================================
// SERVICE CONSTANTS
// ============================================================================

/// Default service name
pub const DEFAULT_SERVICE_NAME: &str = "beacon-service";

/// Provider bound to the instance configuration by the library default module
pub const DEFAULT_LIBRARY_INSTANCE_CONFIG: &str = "cloud";

/// Provider bound to the instance configuration by the deployment override
pub const DEFAULT_OVERRIDE_INSTANCE_CONFIG: &str = "datacenter";

/// Default discovery client provider
pub const DEFAULT_DISCOVERY_CLIENT: &str = "in-memory";

// ============================================================================
// MODULE NAMES
// ============================================================================

/// Name of the library default discovery module
pub const DISCOVERY_MODULE: &str = "discovery";

/// Name of the deployment override module
pub const DEPLOYMENT_OVERRIDE_MODULE: &str = "deployment-override";

/// Requester reported for lookups made after the registry is built
pub const REGISTRY_LOOKUP: &str = "registry lookup";
