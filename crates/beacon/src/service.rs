//! Example discoverable service
//!
//! Marks its instance `UP`, renews its lease once, then serves until
//! interrupted (ctrl-c), until its configured run time elapses, or until
//! `stop` is called. Stopping marks the instance `DOWN`.

use async_trait::async_trait;
use beacon_domain::constants::{APPLICATION, DISCOVERY_CLIENT, INSTANCE_INFO};
use beacon_domain::error::Result;
use beacon_domain::ports::{Application, DiscoveryClient, InstanceInfoManager};
use beacon_domain::value_objects::{BindingSet, Component, ImplementationDescriptor, InstanceStatus};
use beacon_infrastructure::config::ServiceConfig;
use beacon_infrastructure::di::ConfigurationModule;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Name of the application module
pub const APPLICATION_MODULE: &str = "application";

/// A service that registers itself and waits for shutdown
pub struct ExampleService {
    name: String,
    info: Arc<dyn InstanceInfoManager>,
    discovery: Arc<dyn DiscoveryClient>,
    run_for: Option<Duration>,
    shutdown: CancellationToken,
}

impl ExampleService {
    /// Create a service using the given discovery components
    pub fn new(
        name: impl Into<String>,
        info: Arc<dyn InstanceInfoManager>,
        discovery: Arc<dyn DiscoveryClient>,
    ) -> Self {
        Self {
            name: name.into(),
            info,
            discovery,
            run_for: None,
            shutdown: CancellationToken::new(),
        }
    }

    /// Stop by itself after `duration`
    #[must_use]
    pub fn with_run_for(mut self, duration: Option<Duration>) -> Self {
        self.run_for = duration;
        self
    }

    async fn serve(&self) {
        let deadline = async {
            match self.run_for {
                Some(duration) => tokio::time::sleep(duration).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            () = self.shutdown.cancelled() => info!(service = %self.name, "Shutdown requested"),
            () = deadline => info!(service = %self.name, "Run time elapsed"),
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => info!(service = %self.name, "Interrupted"),
                Err(e) => warn!(service = %self.name, error = %e, "Cannot listen for ctrl-c"),
            },
        }
    }
}

impl std::fmt::Debug for ExampleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExampleService")
            .field("name", &self.name)
            .field("run_for", &self.run_for)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Application for ExampleService {
    fn name(&self) -> &str {
        &self.name
    }

    async fn start(&self) -> Result<()> {
        self.info.set_status(InstanceStatus::Up);
        self.discovery.renew().await?;

        let instance = self.info.info();
        info!(
            service = %self.name,
            app = %instance.app_name,
            instance_id = %instance.instance_id,
            discovery = self.discovery.provider_name(),
            "Service is up"
        );

        self.serve().await;
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.shutdown.cancel();
        self.info.set_status(InstanceStatus::Down);
        Ok(())
    }
}

/// Binds [`ExampleService`] as the application
#[derive(Debug, Clone)]
pub struct ApplicationModule {
    service: ServiceConfig,
}

impl ApplicationModule {
    /// Create from the service configuration
    pub fn new(service: ServiceConfig) -> Self {
        Self { service }
    }
}

impl ConfigurationModule for ApplicationModule {
    fn name(&self) -> &str {
        APPLICATION_MODULE
    }

    fn bindings(&self) -> Result<BindingSet> {
        let service = self.service.clone();
        let descriptor = ImplementationDescriptor::new("ExampleService", move |resolver| {
            let app: Arc<dyn Application> = Arc::new(
                ExampleService::new(
                    service.name.clone(),
                    resolver.get::<dyn InstanceInfoManager>(&INSTANCE_INFO)?,
                    resolver.get::<dyn DiscoveryClient>(&DISCOVERY_CLIENT)?,
                )
                .with_run_for(service.run_for_secs.map(Duration::from_secs)),
            );
            Ok(Component::new(app))
        })
        .depends_on(INSTANCE_INFO)
        .depends_on(DISCOVERY_CLIENT);

        BindingSet::builder(APPLICATION_MODULE)
            .bind(APPLICATION, descriptor)
            .build()
    }
}
