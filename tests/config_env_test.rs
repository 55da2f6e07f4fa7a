//! Environment-variable layer of Settings loading.
//!
//! Kept in its own test binary: it mutates process environment, which would
//! leak into the file-based tests in config_test.rs.

use std::env;
use std::fs;

use tempfile::TempDir;

use patternkit::config::Settings;

#[test]
fn given_patternkit_env_vars_when_load_then_override_defaults_and_explicit_file() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("explicit.toml");
    fs::write(
        &explicit,
        r#"
[composite]
delimiter = ","

[observer]
seed = 99
low_limit = 5
"#,
    )
    .unwrap();

    env::set_var("PATTERNKIT_OBSERVER__SEED", "7");
    env::set_var("PATTERNKIT_COMPOSITE__DELIMITER", "/");

    let from_defaults = Settings::load_from(None, None);
    let from_file = Settings::load_from(None, Some(&explicit));

    env::remove_var("PATTERNKIT_OBSERVER__SEED");
    env::remove_var("PATTERNKIT_COMPOSITE__DELIMITER");

    let from_defaults = from_defaults.expect("load with env only");
    assert_eq!(from_defaults.observer.seed, Some(7));
    assert_eq!(from_defaults.composite.delimiter, "/");

    let from_file = from_file.expect("load with env and explicit file");
    assert_eq!(from_file.observer.seed, Some(7), "env wins over explicit file");
    assert_eq!(from_file.composite.delimiter, "/");
    assert_eq!(from_file.observer.low_limit, 5, "keys not in env keep file values");
}
