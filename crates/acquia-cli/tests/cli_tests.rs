//! Integration tests that run the compiled `lando-acquia` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const LANDOFILE: &str = "name: mysite
recipe: acquia
config:
  php: '8.1'
";

fn lando_acquia() -> Command {
    let mut cmd = Command::cargo_bin("lando-acquia").expect("Failed to find lando-acquia binary");
    for var in ["ACQUIA_KEY", "ACQUIA_SECRET", "LANDO_ACQUIA_HOME"] {
        cmd.env_remove(var);
    }
    cmd
}

/// An app directory with a `.lando.yml` and an empty home next to it.
fn app_dir(landofile: &str) -> (TempDir, TempDir) {
    let app = TempDir::new().unwrap();
    fs::write(app.path().join(".lando.yml"), landofile).unwrap();
    (app, TempDir::new().unwrap())
}

#[test]
fn test_help_lists_commands() {
    lando_acquia()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("pull"))
        .stdout(predicate::str::contains("acli-uuid"));
}

#[test]
fn test_version_flag() {
    lando_acquia()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lando-acquia"));
}

#[test]
fn test_no_command_shows_hint() {
    lando_acquia()
        .assert()
        .success()
        .stdout(predicate::str::contains("lando-acquia --help"));
}

#[test]
fn test_tooling_for_postgres() {
    lando_acquia()
        .args(["tooling", "postgres:13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("psql"))
        .stdout(predicate::str::contains("composer"));
}

#[test]
fn test_resolve_acquia_recipe() {
    let (app, home) = app_dir(LANDOFILE);

    lando_acquia()
        .current_dir(app.path())
        .arg("resolve")
        .arg("--home")
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("appserver"))
        .stdout(predicate::str::contains("acquia-memcached:1"))
        .stdout(predicate::str::contains("mysite.lndo.site"));
}

#[test]
fn test_resolve_as_yaml() {
    let (app, home) = app_dir(LANDOFILE);

    lando_acquia()
        .current_dir(app.path())
        .args(["resolve", "--format", "yaml"])
        .arg("--home")
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("services:"));
}

#[test]
fn test_resolve_rejects_other_recipes() {
    let (app, home) = app_dir("name: mysite\nrecipe: drupal10\n");

    lando_acquia()
        .current_dir(app.path())
        .arg("resolve")
        .arg("--home")
        .arg(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("drupal10"));
}

#[test]
fn test_acli_uuid_write_then_read() {
    let dir = TempDir::new().unwrap();

    lando_acquia()
        .current_dir(dir.path())
        .args(["acli-uuid", "--write", "abc-123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));

    lando_acquia()
        .current_dir(dir.path())
        .args(["acli-uuid", "--write", "other"])
        .assert()
        .success()
        .stdout(predicate::str::contains("left untouched"));

    lando_acquia()
        .current_dir(dir.path())
        .arg("acli-uuid")
        .assert()
        .success()
        .stdout(predicate::str::contains("abc-123"));
}

#[test]
fn test_acli_uuid_missing_file() {
    let dir = TempDir::new().unwrap();

    lando_acquia()
        .current_dir(dir.path())
        .arg("acli-uuid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No cloud_app_uuid"));
}

#[test]
fn test_keys_with_empty_home() {
    let home = TempDir::new().unwrap();

    lando_acquia()
        .arg("keys")
        .arg("--home")
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved Acquia keys"));
}

#[test]
fn test_keys_as_json_hide_secrets() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".acquia")).unwrap();
    fs::write(
        home.path().join(".acquia/cloud_api.conf"),
        r#"{"keys": {"k1": {"label": "Work", "secret": "hidden-secret", "uuid": "u1"}}}"#,
    )
    .unwrap();

    lando_acquia()
        .args(["keys", "--json"])
        .arg("--home")
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Work\""))
        .stdout(predicate::str::contains("hidden-secret").not());
}

#[test]
fn test_pull_needs_application_uuid() {
    let (app, home) = app_dir(LANDOFILE);

    lando_acquia()
        .current_dir(app.path())
        .args(["pull", "-n"])
        .arg("--home")
        .arg(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Acquia application UUID"));
}

#[test]
fn test_apps_needs_credentials() {
    lando_acquia()
        .arg("apps")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--key and --secret"));
}
