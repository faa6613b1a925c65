use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;
use wikiskim_config::WikiskimConfigLoader;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn test_config_load_from_file() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
api:
  endpoint: "https://simple.wikipedia.org"
  timeout_secs: 5
log:
  filter: "debug"
"#;
    let p = write_yaml(&tmp, "wikiskim.yaml", file_yaml);

    let config = WikiskimConfigLoader::new()
        .with_file(p)
        .load()
        .expect("load config");

    assert_eq!(config.api.endpoint, "https://simple.wikipedia.org");
    assert_eq!(config.api.timeout_secs, 5);
    assert_eq!(config.log.filter, "debug");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
api:
  timeout_secs: 5
"#;
    let p = write_yaml(&tmp, "wikiskim.yaml", file_yaml);

    std::env::set_var("WIKISKIM_API__TIMEOUT_SECS", "9");
    let config = WikiskimConfigLoader::new()
        .with_file(p)
        .load()
        .expect("load config");
    std::env::remove_var("WIKISKIM_API__TIMEOUT_SECS");

    assert_eq!(config.api.timeout_secs, 9);
}

#[test]
#[serial]
fn test_missing_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.yaml");

    let result = WikiskimConfigLoader::new().with_file(missing).load();
    assert!(result.is_err());
}
