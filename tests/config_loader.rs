use std::fs;

use tally::config::Config;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.toml");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.counter.initial_value, 0);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn full_file_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[counter]
initial_value = 42

[ui]
tick_rate_ms = 100
"#,
    )
    .expect("write");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.counter.initial_value, 42);
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[counter]\ninitial_value = -5\n").expect("write");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.counter.initial_value, -5);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "counter = {").expect("write");

    let err = Config::load_from(&path).expect_err("should fail");
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").expect("write");

    let err = Config::load_from(&path).expect_err("should fail");
    assert!(err.to_string().contains("tick_rate_ms"));
}
