//! Wiring of the shipped modules into a bootstrap

use crate::service::ApplicationModule;
use beacon_domain::error::Result;
use beacon_infrastructure::Bootstrap;
use beacon_infrastructure::config::AppConfig;
use beacon_infrastructure::di::{
    ConfigurationModule, DeploymentOverrideModule, DiscoveryModule, combine,
};
use tracing::info;

/// Bootstrap for the example service
///
/// The base is the library discovery module next to the application
/// module; the deployment override built from `config` is layered on top.
pub fn bootstrap(config: &AppConfig) -> Result<Bootstrap> {
    let discovery = DiscoveryModule::new();
    let application = ApplicationModule::new(config.service.clone());
    let deployment = DeploymentOverrideModule::new(config.clone());

    let base = combine(&[discovery.bindings()?, application.bindings()?])?;
    let overrides = deployment.bindings()?;
    info!(
        base = base.module(),
        overrides = deployment.name(),
        instance_config = %config.discovery.instance_config,
        discovery_client = %config.discovery.client,
        "Modules composed"
    );

    Ok(Bootstrap::new(base).with_override(overrides))
}
