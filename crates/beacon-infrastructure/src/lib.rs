//! # Beacon Infrastructure Layer
//!
//! Everything between the ports and a running service.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration with TOML and env layering |
//! | [`logging`] | Structured logging with tracing |
//! | [`di`] | Binding composition and the instance registry |
//! | [`lifecycle`] | Ordered start and reverse-order stop |
//! | [`bootstrap`] | The entry point tying them together |
//! | [`constants`] | Centralized configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod lifecycle;
pub mod logging;

pub use bootstrap::{Bootstrap, RunOutcome};
pub use error_ext::ErrorContext;
