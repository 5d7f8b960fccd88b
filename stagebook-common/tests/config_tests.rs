//! Configuration resolution tests
//!
//! - Missing TOML files do not stop startup; defaults apply
//! - Priority: command line / env > TOML file > compiled default
//! - Malformed TOML is a configuration error
//!
//! Tests that touch STAGEBOOK_CONFIG are marked #[serial] so they do not race
//! on the process environment.

use std::env;
use std::path::PathBuf;

use serial_test::serial;
use stagebook_common::config::{
    config_file_path, default_database_path, load_toml_config, LoggingConfig, Overrides, Settings,
    TomlConfig, CONFIG_ENV_VAR, DEFAULT_BIND_ADDRESS,
};
use stagebook_common::Error;
use tempfile::TempDir;

#[test]
fn test_default_database_path_is_named_file() {
    let path = default_database_path();
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("stagebook.db"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_toml_config(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_parse_full_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
database_path = "/srv/stagebook/stagebook.db"
bind_address = "0.0.0.0:8080"

[logging]
level = "info"
"#,
    )
    .unwrap();

    let config = load_toml_config(&path).unwrap();
    assert_eq!(
        config,
        TomlConfig {
            database_path: Some(PathBuf::from("/srv/stagebook/stagebook.db")),
            bind_address: Some("0.0.0.0:8080".into()),
            logging: LoggingConfig {
                level: Some("info".into())
            },
        }
    );
}

#[test]
fn test_malformed_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "bind_address = [not toml").unwrap();

    let err = load_toml_config(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}

#[test]
#[serial]
fn test_overrides_beat_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        "database_path = \"/from/toml.db\"\nbind_address = \"127.0.0.1:7000\"\n",
    )
    .unwrap();

    let settings = Settings::resolve(Overrides {
        config_file: Some(path),
        database_path: Some(PathBuf::from("/from/cli.db")),
        bind_address: None,
    })
    .unwrap();

    assert_eq!(settings.database_path, PathBuf::from("/from/cli.db"));
    assert_eq!(settings.bind_address, "127.0.0.1:7000");
    assert_eq!(settings.log_filter, None);
}

#[test]
#[serial]
fn test_env_var_selects_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("from-env.toml");
    std::fs::write(&path, "bind_address = \"127.0.0.1:9001\"\n").unwrap();

    env::set_var(CONFIG_ENV_VAR, &path);
    assert_eq!(config_file_path(None), Some(path.clone()));

    let settings = Settings::resolve(Overrides::default()).unwrap();
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(settings.bind_address, "127.0.0.1:9001");
}

#[test]
#[serial]
fn test_explicit_path_wins_over_env() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/stagebook-env.toml");
    let explicit = PathBuf::from("/tmp/stagebook-cli.toml");
    assert_eq!(config_file_path(Some(&explicit)), Some(explicit.clone()));
    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_explicit_missing_file_falls_back_to_defaults() {
    env::remove_var(CONFIG_ENV_VAR);
    let temp_dir = TempDir::new().unwrap();

    let settings = Settings::resolve(Overrides {
        config_file: Some(temp_dir.path().join("nope.toml")),
        ..Overrides::default()
    })
    .unwrap();

    assert_eq!(settings.bind_address, DEFAULT_BIND_ADDRESS);
    assert_eq!(settings.database_path, default_database_path());
}
