//! Lifecycle manager
//!
//! ```text
//! Uninitialized ──start──▶ Starting ──▶ Running ──stop──▶ Stopping ──▶ Stopped
//!                             │                              ▲
//!                             └── init failure ──▶ Failed ───┘
//! ```
//!
//! Init hooks run one at a time in dependency order. When one fails, the
//! components already started are stopped in reverse order before the
//! failure is returned. `stop` unwinds whatever is still started and never
//! fails; hook failures are collected in the [`ShutdownReport`].

use super::panic_message;
use crate::di::graph::{GraphNode, dependency_order};
use crate::logging::log_lifecycle_transition;
use beacon_domain::error::{Error, Result};
use beacon_domain::ports::LifecycleManaged;
use beacon_domain::value_objects::{Capability, LifecycleState};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Outcome of stopping the started components
#[derive(Debug, Default)]
pub struct ShutdownReport {
    /// Components whose stop hook completed, in the order they were stopped
    pub stopped: Vec<Capability>,
    /// Stop hook failures; reported, never propagated
    pub failures: Vec<Error>,
}

impl ShutdownReport {
    /// Whether every stop hook succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn absorb(&mut self, other: ShutdownReport) {
        self.stopped.extend(other.stopped);
        self.failures.extend(other.failures);
    }
}

struct Registration {
    capability: Capability,
    dependencies: Vec<Capability>,
    hook: Option<Arc<dyn LifecycleManaged>>,
}

/// Starts and stops managed components
#[derive(Default)]
pub struct LifecycleManager {
    state: LifecycleState,
    registrations: Vec<Registration>,
    start_order: Vec<Capability>,
    /// Indices of components whose init hook succeeded, in start order
    started: Vec<usize>,
    /// Cleanup done by a failed start, reported by the next `stop`
    unwound: ShutdownReport,
}

impl LifecycleManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Order computed by `start`; empty before it
    pub fn start_order(&self) -> &[Capability] {
        &self.start_order
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Register a component that must start after `dependencies`
    ///
    /// Components without a hook still take part in ordering.
    pub fn register(
        &mut self,
        capability: Capability,
        dependencies: Vec<Capability>,
        hook: Option<Arc<dyn LifecycleManaged>>,
    ) -> Result<()> {
        if self.state != LifecycleState::Uninitialized {
            return Err(Error::invalid_state("register", self.state));
        }
        if self.registrations.iter().any(|r| r.capability == capability) {
            return Err(Error::duplicate_binding(&capability, "lifecycle"));
        }
        debug!(component = %capability, managed = hook.is_some(), "Component registered");
        self.registrations.push(Registration {
            capability,
            dependencies,
            hook,
        });
        Ok(())
    }

    /// Run every init hook in dependency order
    pub async fn start(&mut self) -> Result<()> {
        if self.state != LifecycleState::Uninitialized {
            return Err(Error::invalid_state("start", self.state));
        }
        self.transition(LifecycleState::Starting);

        let nodes: Vec<GraphNode> = self
            .registrations
            .iter()
            .map(|r| GraphNode::new(r.capability.clone(), r.dependencies.clone()))
            .collect();
        let order = match dependency_order(&nodes) {
            Ok(order) => order,
            Err(e) => {
                error!(error = %e, "Cannot order components for start");
                self.transition(LifecycleState::Failed);
                return Err(e);
            }
        };
        self.start_order = order
            .iter()
            .map(|&i| self.registrations[i].capability.clone())
            .collect();
        info!(order = ?self.start_order, "Starting components");

        for index in order {
            let registration = &self.registrations[index];
            let Some(hook) = registration.hook.clone() else {
                continue;
            };
            let component = registration.capability.clone();

            debug!(component = %component, "Running init hook");
            let failure = match AssertUnwindSafe(hook.init()).catch_unwind().await {
                Ok(Ok(())) => {
                    self.started.push(index);
                    continue;
                }
                Ok(Err(e)) => Error::component_init(&component, e),
                Err(payload) => Error::component_init(
                    &component,
                    Error::internal(format!("init hook panicked: {}", panic_message(&*payload))),
                ),
            };

            error!(component = %component, error = %failure, "Component failed to start");
            self.transition(LifecycleState::Failed);
            let unwound = self.stop_started().await;
            for secondary in &unwound.failures {
                error!(error = %secondary, "Cleanup after failed start also failed");
            }
            self.unwound.absorb(unwound);
            return Err(failure);
        }

        self.transition(LifecycleState::Running);
        Ok(())
    }

    /// Stop every started component in reverse start order
    ///
    /// Does nothing before `start` and after a previous `stop`. Safe to call
    /// after a `start` or `stop` future was dropped before completing.
    pub async fn stop(&mut self) -> ShutdownReport {
        if !self.state.needs_stop() {
            debug!(state = %self.state, "Nothing to stop");
            return ShutdownReport::default();
        }
        // A start or stop future dropped mid-flight leaves its state behind
        match self.state {
            LifecycleState::Starting => {
                warn!("Stopping a lifecycle whose start never completed");
                self.transition(LifecycleState::Failed);
                self.transition(LifecycleState::Stopping);
            }
            LifecycleState::Stopping => {}
            _ => self.transition(LifecycleState::Stopping),
        }

        let mut report = std::mem::take(&mut self.unwound);
        report.absorb(self.stop_started().await);

        self.transition(LifecycleState::Stopped);
        if report.is_clean() {
            info!(stopped = report.stopped.len(), "All components stopped");
        } else {
            warn!(
                stopped = report.stopped.len(),
                failures = report.failures.len(),
                "Components stopped with failures"
            );
        }
        report
    }

    async fn stop_started(&mut self) -> ShutdownReport {
        let mut report = ShutdownReport::default();
        while let Some(index) = self.started.pop() {
            let registration = &self.registrations[index];
            let component = registration.capability.clone();
            let Some(hook) = registration.hook.clone() else {
                continue;
            };

            debug!(component = %component, "Running stop hook");
            match AssertUnwindSafe(hook.stop()).catch_unwind().await {
                Ok(Ok(())) => report.stopped.push(component),
                Ok(Err(e)) => {
                    warn!(component = %component, error = %e, "Stop hook failed");
                    report.failures.push(Error::component_stop(&component, e));
                }
                Err(payload) => {
                    let message = panic_message(&*payload);
                    warn!(component = %component, panic = %message, "Stop hook panicked");
                    report.failures.push(Error::component_stop(
                        &component,
                        Error::internal(format!("stop hook panicked: {}", message)),
                    ));
                }
            }
        }
        report
    }

    fn transition(&mut self, next: LifecycleState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal lifecycle transition {} -> {}",
            self.state,
            next
        );
        log_lifecycle_transition(self.state, next);
        self.state = next;
    }
}

impl std::fmt::Debug for LifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleManager")
            .field("state", &self.state)
            .field("components", &self.registrations.len())
            .field("started", &self.started.len())
            .finish()
    }
}
