//! Loading the JSON configuration file

use std::io::Write;

use kalaha_agent::app::{AppConfig, ClientConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"{
            "agent": { "depth": 6, "seed": 99 },
            "client": { "host": "10.0.0.2", "port": 7000, "poll_interval_ms": 50, "max_move_retries": 1 }
        }"#,
    );
    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.agent.depth, 6);
    assert_eq!(config.agent.seed, Some(99));
    assert_eq!(config.client.address(), "10.0.0.2:7000");
    assert_eq!(config.client.max_move_retries, 1);
}

#[test]
fn test_empty_object_gives_defaults() {
    let file = write_config("{}");
    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.client, ClientConfig::default());
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config(r#"{ "agent": { "depth": 99 } }"#);
    assert!(matches!(
        AppConfig::load(file.path()),
        Err(kalaha_agent::Error::InvalidConfiguration { .. })
    ));

    let file = write_config("not json");
    assert!(matches!(
        AppConfig::load(file.path()),
        Err(kalaha_agent::Error::Serialization(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        AppConfig::load(&missing),
        Err(kalaha_agent::Error::Io { .. })
    ));
}
