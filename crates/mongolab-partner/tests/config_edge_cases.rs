use std::fs;
use std::path::PathBuf;

use mongolab_partner::{Config, DEFAULT_API_URL};
use tempfile::TempDir;

/// Returns true if running as root (euid == 0). Used to skip permission tests.
#[cfg(unix)]
fn is_root() -> bool {
    // Use `id -u` to check the effective user ID without depending on libc.
    std::process::Command::new("id")
        .arg("-u")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim() == "0")
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// 1. Missing config directory / nonexistent path
// ---------------------------------------------------------------------------

#[test]
fn load_from_nonexistent_path_returns_default_config() {
    let path = PathBuf::from("/tmp/mongolabctl-test-nonexistent/does/not/exist/config.toml");
    assert!(!path.exists());

    let config = Config::load_from_path(&path).expect("should not panic or error on missing path");

    assert!(config.profiles.is_empty());
    assert!(config.default_profile.is_none());
}

// ---------------------------------------------------------------------------
// 2. Empty config file
// ---------------------------------------------------------------------------

#[test]
fn load_empty_config_file_returns_default_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    let config = Config::load_from_path(&config_path).expect("empty file should parse as default");

    assert!(config.profiles.is_empty());
    assert!(config.default_profile.is_none());
}

// ---------------------------------------------------------------------------
// 3. Corrupt / invalid TOML
// ---------------------------------------------------------------------------

#[test]
fn load_corrupt_toml_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[[[broken").unwrap();

    let result = Config::load_from_path(&config_path);
    assert!(result.is_err(), "corrupt TOML should produce an error");

    let err = result.unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("parse") || msg.contains("Parse"),
        "error should mention parsing: {msg}"
    );
}

// ---------------------------------------------------------------------------
// 4. Partial / incomplete config (profile missing required fields)
// ---------------------------------------------------------------------------

#[test]
fn load_profile_missing_required_fields_returns_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    // A profile that is missing account and username
    let content = r#"
[profiles.broken]
password = "secret"
"#;
    fs::write(&config_path, content).unwrap();

    let result = Config::load_from_path(&config_path);
    assert!(
        result.is_err(),
        "incomplete profile should produce an error"
    );
}

// ---------------------------------------------------------------------------
// 5. Config with unknown / extra fields
// ---------------------------------------------------------------------------

#[test]
fn load_config_with_unknown_fields_ignores_them() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let content = r#"
unknown_top_level_key = "hello"

[profiles.acme]
account = "acme"
username = "info@acme.example"
totally_unknown_field = true
"#;
    fs::write(&config_path, content).unwrap();

    let config =
        Config::load_from_path(&config_path).expect("unknown fields should be silently ignored");

    assert!(config.profiles.contains_key("acme"));
    assert_eq!(config.profiles["acme"].api_url, DEFAULT_API_URL);
}

// ---------------------------------------------------------------------------
// 6. Environment variable expansion in values
// ---------------------------------------------------------------------------

#[test]
#[serial_test::serial]
fn load_expands_env_vars_in_values() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let content = r#"
[profiles.acme]
account = "acme"
username = "info@acme.example"
password = "${MONGOLAB_EDGE_TEST_PASSWORD}"
"#;
    fs::write(&config_path, content).unwrap();

    std::env::set_var("MONGOLAB_EDGE_TEST_PASSWORD", "from-env");
    let config = Config::load_from_path(&config_path).unwrap();
    std::env::remove_var("MONGOLAB_EDGE_TEST_PASSWORD");

    assert_eq!(
        config.profiles["acme"].password.as_deref(),
        Some("from-env")
    );
}

// ---------------------------------------------------------------------------
// 7. Permission errors (unix only)
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn load_unreadable_file_returns_clear_error() {
    use std::os::unix::fs::PermissionsExt;

    // Skip if running as root (permissions won't be enforced)
    if is_root() {
        eprintln!("skipping test: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "# valid toml").unwrap();

    // Make file unreadable
    fs::set_permissions(&config_path, fs::Permissions::from_mode(0o000)).unwrap();

    let result = Config::load_from_path(&config_path);
    assert!(result.is_err(), "unreadable file should produce an error");

    let err = result.unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("load") || msg.contains("Load") || msg.contains("Permission"),
        "error should reference loading or permissions: {msg}"
    );

    // Restore permissions so TempDir cleanup can remove the file
    fs::set_permissions(&config_path, fs::Permissions::from_mode(0o644)).unwrap();
}

// ---------------------------------------------------------------------------
// 8. Save to read-only directory (unix only)
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn save_to_readonly_directory_returns_clear_error() {
    use std::os::unix::fs::PermissionsExt;

    // Skip if running as root (permissions won't be enforced)
    if is_root() {
        eprintln!("skipping test: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let readonly_dir = dir.path().join("readonly");
    fs::create_dir(&readonly_dir).unwrap();
    fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o444)).unwrap();

    let config_path = readonly_dir.join("config.toml");
    let config = Config::default();

    let result = config.save_to_path(&config_path);
    assert!(
        result.is_err(),
        "saving to read-only directory should produce an error"
    );

    let err = result.unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("save") || msg.contains("Save") || msg.contains("Permission"),
        "error should reference saving or permissions: {msg}"
    );

    // Restore permissions so TempDir cleanup can remove the directory
    fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o755)).unwrap();
}

// ---------------------------------------------------------------------------
// 9. Save then load round trip through the filesystem
// ---------------------------------------------------------------------------

#[test]
fn save_creates_parent_dirs_and_round_trips() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("deeper").join("config.toml");

    let mut config = Config::default();
    config.default_profile = Some("acme".to_string());
    config.set_profile(
        "acme".to_string(),
        mongolab_partner::Profile {
            account: "acme".to_string(),
            username: "info@acme.example".to_string(),
            password: Some("secret".to_string()),
            api_url: DEFAULT_API_URL.to_string(),
        },
    );

    config.save_to_path(&config_path).expect("save should create parent dirs");
    let loaded = Config::load_from_path(&config_path).unwrap();

    assert_eq!(loaded.default_profile.as_deref(), Some("acme"));
    assert_eq!(loaded.profiles["acme"], config.profiles["acme"]);
}
