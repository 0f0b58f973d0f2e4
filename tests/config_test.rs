//! Config file loading.

use std::io::Write;
use tictactoe::AppConfig;
use tictactoe_core::GameMode;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_values_loaded() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "mode = \"vs-computer\"\ncomputer_delay_ms = 250\nseed = 42\nlog_file = \"game.log\""
    )
    .expect("write config");

    let config = AppConfig::load_or_default(file.path()).expect("valid config");
    assert_eq!(*config.mode(), GameMode::VsComputer);
    assert_eq!(config.computer_delay().as_millis(), 250);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_bad_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "computer_delay_ms = \"soon\"").expect("write config");
    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
