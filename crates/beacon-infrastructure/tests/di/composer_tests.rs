//! Override composition tests

use beacon_domain::value_objects::{BindingSet, Capability, Component, ImplementationDescriptor};
use beacon_infrastructure::di::{InstanceRegistry, combine, compose};
use std::sync::Arc;

trait Config: Send + Sync {
    fn kind(&self) -> &'static str;
}

struct CloudConfig;
struct LocalConfig;

impl Config for CloudConfig {
    fn kind(&self) -> &'static str {
        "cloud"
    }
}

impl Config for LocalConfig {
    fn kind(&self) -> &'static str {
        "local"
    }
}

fn config(kind: &'static str) -> ImplementationDescriptor {
    ImplementationDescriptor::new(kind, move |_| {
        let config: Arc<dyn Config> = match kind {
            "cloud" => Arc::new(CloudConfig),
            _ => Arc::new(LocalConfig),
        };
        Ok(Component::new(config))
    })
}

fn set(module: &str, implementation: &'static str) -> BindingSet {
    BindingSet::builder(module)
        .bind("config", config(implementation))
        .build()
        .unwrap()
}

fn implementation_of(set: &BindingSet, capability: &str) -> String {
    set.get(&Capability::new(capability))
        .unwrap()
        .implementation()
        .to_string()
}

#[test]
fn test_later_module_wins() {
    let a = set("a", "cloud");
    let b = set("b", "local");
    let c = set("c", "cloud");

    assert_eq!(implementation_of(&compose(&a, &[b.clone()]), "config"), "local");
    assert_eq!(implementation_of(&compose(&a, &[b, c]), "config"), "cloud");
}

#[test]
fn test_absent_from_overrides_keeps_base() {
    let base = BindingSet::builder("base")
        .bind("config", config("cloud"))
        .bind("other", config("cloud"))
        .build()
        .unwrap();
    let merged = compose(&base, &[set("override", "local")]);

    assert_eq!(implementation_of(&merged, "config"), "local");
    assert_eq!(implementation_of(&merged, "other"), "cloud");
}

#[test]
fn test_compose_is_deterministic_and_pure() {
    let base = set("base", "cloud");
    let overrides = vec![set("override", "local")];

    let first = compose(&base, &overrides);
    let second = compose(&base, &overrides);

    let describe = |s: &BindingSet| {
        s.iter()
            .map(|b| format!("{}={}", b.capability(), b.implementation()))
            .collect::<Vec<_>>()
    };
    assert_eq!(describe(&first), describe(&second));
    assert_eq!(implementation_of(&base, "config"), "cloud");
    assert_eq!(implementation_of(&overrides[0], "config"), "local");
}

#[test]
fn test_override_resolves_to_local_config() {
    let merged = compose(&set("base", "cloud"), &[set("override", "local")]);
    let registry = InstanceRegistry::build(&merged).unwrap();

    let config = registry.get::<dyn Config>(&Capability::new("config")).unwrap();
    assert_eq!(config.kind(), "local");
}

#[test]
fn test_combine_concatenates_disjoint_modules() {
    let discovery = set("discovery", "cloud");
    let app = BindingSet::builder("app")
        .bind("application", config("local"))
        .build()
        .unwrap();

    let combined = combine(&[discovery, app]).unwrap();
    let capabilities: Vec<&str> = combined.capabilities().map(Capability::as_str).collect();
    assert_eq!(capabilities, vec!["config", "application"]);
    assert_eq!(combined.module(), "discovery+app");
}
