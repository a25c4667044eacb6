//! Service entry point
//!
//! ```text
//! compose ──▶ build registry ──▶ lifecycle.start ──▶ application.start
//!    │              │                   │                    │
//!    │              └── build error ────┤                    │
//!    │                                  ▼                    ▼
//!    │                     application.stop (iff started) + lifecycle.stop
//! ```
//!
//! Whatever happens after the registry is built, the lifecycle manager is
//! stopped exactly once, and the application is stopped exactly once if its
//! `start` was invoked.

use crate::di::{InstanceRegistry, compose};
use crate::lifecycle::{LifecycleManager, ShutdownReport, panic_message};
use beacon_domain::constants::APPLICATION;
use beacon_domain::error::{Error, Result};
use beacon_domain::ports::Application;
use beacon_domain::value_objects::{BindingSet, Capability};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, info, warn};

/// What a bootstrap run ended with
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// The unrecovered failure, if any
    pub error: Option<Error>,
    /// Shutdown result; empty when the build failed
    pub shutdown: ShutdownReport,
    /// Order the components were started in
    pub start_order: Vec<Capability>,
    /// Whether the application's `start` was invoked
    pub application_started: bool,
}

impl RunOutcome {
    /// Whether the run stopped gracefully
    ///
    /// Stop failures are reported but do not make a run unsuccessful.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Process exit code: 0 on graceful stop, 1 on an unrecovered failure
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    fn failed(error: Error) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Composes binding sets and runs the application they describe
///
/// The first binding set is the base; the rest override it in order.
#[derive(Debug)]
pub struct Bootstrap {
    base: BindingSet,
    overrides: Vec<BindingSet>,
    application: Capability,
}

impl Bootstrap {
    /// Start from the base binding set
    pub fn new(base: BindingSet) -> Self {
        Self {
            base,
            overrides: Vec::new(),
            application: APPLICATION,
        }
    }

    /// Add an override; later overrides win
    #[must_use]
    pub fn with_override(mut self, overrides: BindingSet) -> Self {
        self.overrides.push(overrides);
        self
    }

    /// Resolve the application from another capability
    #[must_use]
    pub fn with_application(mut self, capability: impl Into<Capability>) -> Self {
        self.application = capability.into();
        self
    }

    /// Run to completion
    ///
    /// Never panics on component or application failures; every error is
    /// logged and kept in the outcome.
    pub async fn run(self) -> RunOutcome {
        let merged = compose(&self.base, &self.overrides);
        let registry = match InstanceRegistry::build(&merged) {
            Ok(registry) => registry,
            Err(e) => {
                error!(error = %e, "Failed to build components");
                return RunOutcome::failed(e);
            }
        };

        let mut lifecycle = LifecycleManager::new();
        for managed in registry.managed_components() {
            if let Err(e) = lifecycle.register(
                managed.capability.clone(),
                managed.dependencies.clone(),
                managed.hook.clone(),
            ) {
                error!(error = %e, "Failed to register component");
                return RunOutcome::failed(e);
            }
        }

        let mut outcome = RunOutcome::default();
        let mut application = None;

        match lifecycle.start().await {
            Ok(()) => match registry.get::<dyn Application>(&self.application) {
                Ok(app) => {
                    outcome.application_started = true;
                    if let Err(e) = run_application(app.as_ref()).await {
                        error!(application = app.name(), error = %e, "Application failed");
                        outcome.error = Some(e);
                    }
                    application = Some(app);
                }
                Err(e) => {
                    error!(error = %e, "Failed to resolve application");
                    outcome.error = Some(e);
                }
            },
            Err(e) => {
                error!(error = %e, "Failed to start components");
                outcome.error = Some(e);
            }
        }
        outcome.start_order = lifecycle.start_order().to_vec();

        let application_stop = match &application {
            Some(app) => stop_application(app, &self.application).await.err(),
            None => None,
        };

        outcome.shutdown = lifecycle.stop().await;
        if let Some(e) = application_stop {
            outcome.shutdown.failures.insert(0, e);
        }
        for failure in &outcome.shutdown.failures {
            error!(error = %failure, "Shutdown failure");
        }

        match &outcome.error {
            None => info!("Service stopped gracefully"),
            Some(e) => error!(error = %e, "Service stopped after failure"),
        }
        outcome
    }
}

async fn run_application(app: &dyn Application) -> Result<()> {
    info!(application = app.name(), "Starting application");
    match AssertUnwindSafe(app.start()).catch_unwind().await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(Error::application_runtime(app.name(), e)),
        Err(payload) => Err(Error::application_runtime(
            app.name(),
            Error::internal(format!("application panicked: {}", panic_message(&*payload))),
        )),
    }
}

async fn stop_application(app: &Arc<dyn Application>, capability: &Capability) -> Result<()> {
    info!(application = app.name(), "Stopping application");
    let failure = match AssertUnwindSafe(app.stop()).catch_unwind().await {
        Ok(Ok(())) => return Ok(()),
        Ok(Err(e)) => e,
        Err(payload) => Error::internal(format!(
            "application stop panicked: {}",
            panic_message(&*payload)
        )),
    };
    warn!(application = app.name(), error = %failure, "Application stop failed");
    Err(Error::component_stop(capability, failure))
}
