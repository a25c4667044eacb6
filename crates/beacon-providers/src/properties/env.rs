//! Environment-backed properties

use crate::constants::DEFAULT_ENV_PROPERTY_PREFIX;
use beacon_domain::ports::PropertySource;

/// Reads `instance.app-name` from `BEACON_PROP_INSTANCE_APP_NAME`
///
/// Keys are upper-cased and every `.` or `-` becomes `_`.
#[derive(Debug, Clone)]
pub struct EnvPropertySource {
    prefix: String,
}

impl EnvPropertySource {
    /// Source using the default `BEACON_PROP` prefix
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ENV_PROPERTY_PREFIX)
    }

    /// Source using a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable consulted for `key`
    pub fn variable_name(&self, key: &str) -> String {
        let key: String = key
            .chars()
            .map(|c| match c {
                '.' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        format!("{}_{key}", self.prefix)
    }
}

impl Default for EnvPropertySource {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertySource for EnvPropertySource {
    fn name(&self) -> &str {
        "environment"
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(self.variable_name(key)).ok()
    }
}
