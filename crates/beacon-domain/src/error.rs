//! Error handling types

use crate::value_objects::{Capability, LifecycleState};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by wrapping variants
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the Beacon bootstrap
#[derive(Error, Debug)]
pub enum Error {
    /// A required capability has no implementation after override composition
    #[error("Missing binding for {capability} (required by {requested_by})")]
    MissingBinding {
        /// The unresolved capability
        capability: Capability,
        /// The component that declared the dependency
        requested_by: String,
    },

    /// The dependency relation between bindings is not a DAG
    #[error("Cyclic dependency: {}", format_path(.path))]
    CyclicDependency {
        /// Capabilities along the cycle, first element repeated at the end
        path: Vec<Capability>,
    },

    /// The same capability was declared twice inside one module
    #[error("Duplicate binding for {capability} in module '{module}'")]
    DuplicateBinding {
        /// The capability declared twice
        capability: Capability,
        /// Module that declared it
        module: String,
    },

    /// A factory asked for a capability it did not declare
    #[error("{requested_by} resolved undeclared dependency {capability}")]
    UndeclaredDependency {
        /// The capability that was asked for
        capability: Capability,
        /// The component whose factory asked
        requested_by: Capability,
    },

    /// A component was looked up with the wrong type
    #[error("Component {capability} is not a {expected}")]
    ComponentType {
        /// The capability that was looked up
        capability: Capability,
        /// Type the caller asked for
        expected: &'static str,
    },

    /// A component factory failed while building the instance registry
    #[error("Failed to construct {capability}: {source}")]
    ComponentConstruction {
        /// The capability being constructed
        capability: Capability,
        /// Underlying failure
        #[source]
        source: BoxError,
    },

    /// A component init hook failed during lifecycle start
    #[error("Init hook of {component} failed: {source}")]
    ComponentInit {
        /// The component whose hook failed
        component: Capability,
        /// Underlying failure
        #[source]
        source: BoxError,
    },

    /// A component stop hook failed during shutdown
    #[error("Stop hook of {component} failed: {source}")]
    ComponentStop {
        /// The component whose hook failed
        component: Capability,
        /// Underlying failure
        #[source]
        source: BoxError,
    },

    /// The application's own start failed
    #[error("Application '{application}' failed: {source}")]
    ApplicationRuntime {
        /// Application name
        application: String,
        /// Underlying failure
        #[source]
        source: BoxError,
    },

    /// A lifecycle operation was requested in a state that does not allow it
    #[error("Cannot {operation} while lifecycle is {state}")]
    InvalidLifecycleState {
        /// The rejected operation
        operation: &'static str,
        /// State at the time of the request
        state: LifecycleState,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Discovery client error
    #[error("Discovery error: {message}")]
    Discovery {
        /// Description of the discovery error
        message: String,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

fn format_path(path: &[Capability]) -> String {
    path.iter()
        .map(Capability::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

// Binding and graph error creation methods
impl Error {
    /// Create a missing binding error
    pub fn missing_binding<S: Into<String>>(capability: &Capability, requested_by: S) -> Self {
        Self::MissingBinding {
            capability: capability.clone(),
            requested_by: requested_by.into(),
        }
    }

    /// Create a cyclic dependency error
    pub fn cyclic_dependency(path: Vec<Capability>) -> Self {
        Self::CyclicDependency { path }
    }

    /// Create a duplicate binding error
    pub fn duplicate_binding<S: Into<String>>(capability: &Capability, module: S) -> Self {
        Self::DuplicateBinding {
            capability: capability.clone(),
            module: module.into(),
        }
    }

    /// Create a component construction error
    pub fn construction(capability: &Capability, source: impl Into<BoxError>) -> Self {
        Self::ComponentConstruction {
            capability: capability.clone(),
            source: source.into(),
        }
    }
}

// Lifecycle error creation methods
impl Error {
    /// Create a component init error
    pub fn component_init(component: &Capability, source: impl Into<BoxError>) -> Self {
        Self::ComponentInit {
            component: component.clone(),
            source: source.into(),
        }
    }

    /// Create a component stop error
    pub fn component_stop(component: &Capability, source: impl Into<BoxError>) -> Self {
        Self::ComponentStop {
            component: component.clone(),
            source: source.into(),
        }
    }

    /// Create an application runtime error
    pub fn application_runtime<S: Into<String>>(
        application: S,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::ApplicationRuntime {
            application: application.into(),
            source: source.into(),
        }
    }

    /// Create an invalid lifecycle state error
    pub fn invalid_state(operation: &'static str, state: LifecycleState) -> Self {
        Self::InvalidLifecycleState { operation, state }
    }
}

// Configuration, discovery and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a discovery error
    pub fn discovery<S: Into<String>>(message: S) -> Self {
        Self::Discovery {
            message: message.into(),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether the error was raised before any component started
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            Self::MissingBinding { .. }
                | Self::CyclicDependency { .. }
                | Self::DuplicateBinding { .. }
                | Self::UndeclaredDependency { .. }
                | Self::ComponentConstruction { .. }
        )
    }
}
