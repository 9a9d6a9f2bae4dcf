use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a test command
fn mongolabctl() -> Command {
    Command::cargo_bin("mongolabctl").unwrap()
}

/// Helper for a command pointed at an isolated (empty) config file, so the
/// test never touches the developer's real profiles or environment.
fn mongolabctl_isolated(dir: &tempfile::TempDir) -> Command {
    let mut cmd = mongolabctl();
    cmd.arg("--config-file")
        .arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_help_flag() {
    mongolabctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("partner accounts"))
        .stdout(predicate::str::contains("EXAMPLES:"));
}

#[test]
fn test_help_short_flag() {
    mongolabctl()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag() {
    mongolabctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mongolabctl"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_args_shows_help() {
    mongolabctl()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    mongolabctl()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_account_help() {
    mongolabctl()
        .arg("account")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Partner account operations"));
}

#[test]
fn test_database_help() {
    mongolabctl()
        .arg("database")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Partner database operations"));
}

#[test]
fn test_api_help() {
    mongolabctl()
        .arg("api")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Raw API access"));
}

#[test]
fn test_profile_help() {
    mongolabctl()
        .arg("profile")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile management"));
}

#[test]
fn test_account_get_requires_name() {
    mongolabctl()
        .arg("account")
        .arg("get")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_account_create_requires_data() {
    mongolabctl()
        .arg("account")
        .arg("create")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--data"));
}

#[test]
fn test_database_delete_requires_db_name() {
    mongolabctl()
        .arg("database")
        .arg("delete")
        .arg("acme_customer42")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_api_rejects_unknown_http_method() {
    mongolabctl()
        .arg("api")
        .arg("patch")
        .arg("/partners/acme/accounts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid HTTP method"));
}

#[test]
fn test_invalid_output_format_rejected() {
    mongolabctl()
        .arg("account")
        .arg("list")
        .arg("-o")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_profile_list_with_empty_config() {
    let dir = tempfile::TempDir::new().unwrap();
    mongolabctl_isolated(&dir)
        .arg("profile")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_profile_set_and_show_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();

    mongolabctl_isolated(&dir)
        .arg("profile")
        .arg("set")
        .arg("acme")
        .arg("--account")
        .arg("acme")
        .arg("--username")
        .arg("info@acme.example")
        .arg("--password")
        .arg("secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("saved"));

    mongolabctl_isolated(&dir)
        .arg("profile")
        .arg("show")
        .arg("acme")
        .assert()
        .success()
        .stdout(predicate::str::contains("info@acme.example"))
        // The password itself must never be printed
        .stdout(predicate::str::contains("secret").not())
        .stdout(predicate::str::contains("<configured>"));
}

#[test]
fn test_profile_remove_unknown_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    mongolabctl_isolated(&dir)
        .arg("profile")
        .arg("remove")
        .arg("ghost")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_account_list_without_profile_fails_with_guidance() {
    let dir = tempfile::TempDir::new().unwrap();
    mongolabctl_isolated(&dir)
        .arg("account")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile set"));
}

#[test]
fn test_profile_path_prints_config_location() {
    let dir = tempfile::TempDir::new().unwrap();
    mongolabctl_isolated(&dir)
        .arg("profile")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
