//! Key/value override source

use crate::error::{Error, Result};
use std::str::FromStr;

/// Process-wide key/value source consulted by component factories
pub trait PropertySource: Send + Sync {
    /// Source name for diagnostics
    fn name(&self) -> &str;

    /// Raw value for `key`
    fn get(&self, key: &str) -> Option<String>;
}

impl dyn PropertySource + '_ {
    /// Value for `key`, or `default` when absent
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Value for `key`, or a configuration error naming the key
    pub fn require(&self, key: &str) -> Result<String> {
        self.get(key).ok_or_else(|| {
            Error::configuration(format!("Property '{key}' is not set in {}", self.name()))
        })
    }

    /// Parsed value for `key`, `default` when absent
    pub fn get_parsed<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw.trim().parse().map_err(|e| {
                Error::configuration(format!("Property '{key}' has invalid value '{raw}': {e}"))
            }),
            None => Ok(default),
        }
    }
}
