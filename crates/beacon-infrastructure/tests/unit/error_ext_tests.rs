//! Error context extension tests

use beacon_domain::error::Error;
use beacon_infrastructure::error_ext::ErrorContext;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_io_context_keeps_source() {
    let err = io_failure().io_context("Failed to read beacon.toml").unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("Failed to read beacon.toml"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("Bad config").unwrap_err();
    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
}

#[test]
fn test_ok_values_pass_through() {
    let ok: Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.config_context("never used").unwrap(), 7);
}

#[test]
fn test_missing_explicit_config_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = std::fs::read_to_string(&path)
        .io_context(format!("Failed to read {}", path.display()))
        .unwrap_err();

    assert!(matches!(err, Error::Io { source: Some(_), .. }));
    assert!(err.to_string().contains("absent.toml"));
}
