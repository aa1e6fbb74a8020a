use acquia_fs::{ConfigStore, Format, NormalizedPath};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct CliConfig {
    cloud_app_uuid: String,
}

#[rstest]
#[case("acli.yml", "cloud_app_uuid: abc-123\n")]
#[case("acli.yaml", "cloud_app_uuid: abc-123\n")]
#[case("acli.json", r#"{"cloud_app_uuid": "abc-123"}"#)]
fn test_load_by_extension(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(name);
    fs::write(&file_path, content).unwrap();

    let config: CliConfig = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(
        config,
        CliConfig {
            cloud_app_uuid: "abc-123".into()
        }
    );
}

#[test]
fn test_conf_extension_is_json() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("cloud_api.conf");
    fs::write(&file_path, r#"{"cloud_app_uuid": "x"}"#).unwrap();

    let config: CliConfig = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(config.cloud_app_uuid, "x");
}

#[test]
fn test_load_optional_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("composer.json"));

    let config: Option<serde_json::Value> = ConfigStore::new().load_optional(&path).unwrap();

    assert!(config.is_none());
}

#[test]
fn test_load_invalid_json_reports_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("composer.json");
    fs::write(&file_path, "{ not json").unwrap();

    let result: acquia_fs::Result<serde_json::Value> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));

    let err = result.unwrap_err().to_string();
    assert!(err.contains("JSON"), "got: {}", err);
}

#[rstest]
#[case("settings.inc", "<?php")]
#[case("acli.toml", "cloud_app_uuid = \"abc-123\"\n")]
fn test_unsupported_extension(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(name);
    fs::write(&file_path, content).unwrap();

    let result: acquia_fs::Result<serde_json::Value> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));

    assert!(matches!(
        result,
        Err(acquia_fs::Error::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_load_as_explicit_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("cloud_api");
    fs::write(&file_path, r#"{"cloud_app_uuid": "y"}"#).unwrap();

    let config: CliConfig = ConfigStore::new()
        .load_as(&NormalizedPath::new(&file_path), Format::Json)
        .unwrap();

    assert_eq!(config.cloud_app_uuid, "y");
}
