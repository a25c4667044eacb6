//! # Beacon
//!
//! Bootstraps a discoverable service from layered configuration modules.
//!
//! A library ships default bindings (the discovery module). A deployment
//! lists override modules after it; for every capability the last module
//! wins. The merged bindings are validated and built into an instance
//! registry, managed components are started in dependency order, and the
//! application runs until it stops or fails. Cleanup always happens.
//!
//! ## Example
//!
//! ```ignore
//! use beacon::infrastructure::config::ConfigLoader;
//!
//! let config = ConfigLoader::new().load()?;
//! let outcome = beacon::launcher::bootstrap(&config)?.run().await;
//! std::process::ExitCode::from(outcome.exit_code())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Capabilities, bindings, lifecycle states, ports and errors
//! - `application` - Name-keyed provider registries
//! - `providers` - Instance configs, discovery clients, event bus, property sources
//! - `infrastructure` - Config, logging, container, lifecycle and bootstrap

/// Domain layer - capabilities, bindings, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use beacon_domain::*;
}

/// Application layer - provider registries
pub mod application {
    pub use beacon_application::*;
}

/// Provider implementations
pub mod providers {
    pub use beacon_providers::*;
}

/// Infrastructure layer - config, logging, container, lifecycle and bootstrap
pub mod infrastructure {
    pub use beacon_infrastructure::*;
}

pub mod launcher;
pub mod service;

pub use domain::*;
pub use infrastructure::{Bootstrap, RunOutcome};
pub use service::{ApplicationModule, ExampleService};
