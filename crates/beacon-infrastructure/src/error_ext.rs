//! Context for foreign errors crossing into the domain [`Error`]
//!
//! Config loading talks to figment, toml and the filesystem; each of those
//! failures is wrapped with a message naming what was being attempted and
//! keeps the original error as its source.

use beacon_domain::error::{Error, Result};
use std::fmt::Display;

/// Wrap a foreign error as an I/O or configuration [`Error`]
///
/// ```ignore
/// use beacon_infrastructure::ErrorContext;
///
/// let config: AppConfig = figment.extract().config_context("Failed to extract configuration")?;
/// std::fs::write(&path, text).io_context(format!("Failed to write {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Wrap as [`Error::Io`]
    fn io_context(self, message: impl Display) -> Result<T>;

    /// Wrap as [`Error::Configuration`]
    fn config_context(self, message: impl Display) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context(self, message: impl Display) -> Result<T> {
        self.map_err(|err| Error::io_with_source(format!("{message}: {err}"), err))
    }

    fn config_context(self, message: impl Display) -> Result<T> {
        self.map_err(|err| Error::configuration_with_source(format!("{message}: {err}"), err))
    }
}
