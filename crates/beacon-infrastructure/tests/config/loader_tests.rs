//! Configuration loader tests

use beacon_domain::error::Error;
use beacon_infrastructure::config::{AppConfig, ConfigLoader};
use beacon_infrastructure::constants::{DEFAULT_DISCOVERY_CLIENT, DEFAULT_LOG_LEVEL, DEFAULT_OVERRIDE_INSTANCE_CONFIG};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_loader_default() {
    let config = ConfigLoader::new().load().unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.discovery.instance_config, DEFAULT_OVERRIDE_INSTANCE_CONFIG);
    assert_eq!(config.discovery.client, DEFAULT_DISCOVERY_CLIENT);
    assert!(config.properties.is_empty());
}

#[test]
fn test_config_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("beacon.toml");
    fs::write(
        &config_path,
        r#"
[service]
name = "orders"
run_for_secs = 5

[discovery]
client = "null"
event_bus = true

[properties]
"instance.app-name" = "orders"
"instance.port" = "9090"
"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.service.name, "orders");
    assert_eq!(config.service.run_for_secs, Some(5));
    assert_eq!(config.discovery.client, "null");
    assert!(config.discovery.event_bus);
    // Unset keys keep their defaults
    assert_eq!(config.discovery.instance_config, DEFAULT_OVERRIDE_INSTANCE_CONFIG);
    assert_eq!(config.properties.get("instance.port").map(String::as_str), Some("9090"));
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.service.name = "inventory".to_string();
    original.discovery.event_bus = true;
    original
        .properties
        .insert("instance.app-name".to_string(), "inventory".to_string());

    let loader = ConfigLoader::new();
    loader.save_to_file(&original, &config_path).unwrap();

    let loaded = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_source_path_reports_the_file_that_was_read() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("beacon.toml");
    fs::write(&config_path, "[service]\nname = \"orders\"\n").unwrap();

    let loader = ConfigLoader::new().with_config_path(&config_path);
    assert_eq!(loader.source_path(), Some(config_path.clone()));
    assert_eq!(loader.load().unwrap().service.name, "orders");

    let missing = ConfigLoader::new().with_config_path(temp_dir.path().join("absent.toml"));
    assert_eq!(missing.source_path(), None);
}

#[test]
fn test_invalid_values_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let cases = [
        ("[logging]\nlevel = \"loud\"\n", "Invalid log level"),
        ("[service]\nname = \"  \"\n", "Service name"),
        ("[service]\nrun_for_secs = 0\n", "run duration"),
        ("[discovery]\nclient = \"zookeeper\"\n", "zookeeper"),
        ("[discovery]\ninstance_config = \"mainframe\"\n", "mainframe"),
    ];

    for (i, (contents, expected)) in cases.iter().enumerate() {
        let path = temp_dir.path().join(format!("case{i}.toml"));
        fs::write(&path, contents).unwrap();

        let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "case {i}: expected '{expected}' in '{err}'"
        );
    }
}

#[test]
fn test_config_serializes_to_json() {
    let value = serde_json::to_value(AppConfig::default()).unwrap();
    assert_eq!(value["discovery"]["client"], DEFAULT_DISCOVERY_CLIENT);
    assert_eq!(value["logging"]["json_format"], false);
}
