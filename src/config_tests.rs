//! Tests for config

use super::*;
use crate::command::{MessageFormat, SpanMode};
use proptest::prelude::*;
use std::io::Write;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.output.format, MessageFormat::Json);
    assert_eq!(config.output.span, SpanMode::Brackets);
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_from(&temp_dir.path().join("absent.toml"));
    assert_eq!(result.config.output, OutputConfig::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let (_dir, path) = write_config("[output]\nformat = \"text\"\nspan = \"contents\"\n");
    let result = load_config_from(&path);
    assert!(result.warning.is_none());
    assert_eq!(result.config.output.format, MessageFormat::Text);
    assert_eq!(result.config.output.span, SpanMode::Contents);
}

#[test]
fn test_invalid_value_falls_back_with_warning() {
    let (_dir, path) = write_config("[output]\nformat = \"xml\"\n");
    let result = load_config_from(&path);
    assert_eq!(result.config.output, OutputConfig::default());
    let warning = result.warning.expect("invalid config should warn");
    assert!(warning.starts_with("Invalid config:"), "got: {}", warning);
}

#[test]
fn test_unreadable_path_falls_back_with_warning() {
    // A directory exists but cannot be read as a file
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_from(temp_dir.path());
    assert_eq!(result.config.output, OutputConfig::default());
    let warning = result.warning.expect("unreadable config should warn");
    assert!(warning.starts_with("Failed to read config:"), "got: {}", warning);
}

#[test]
fn test_config_path_consistency() {
    let path1 = get_config_path();
    let path2 = get_config_path();

    assert_eq!(path1, path2, "Config path should be consistent");

    let path_str = path1.to_string_lossy();
    assert!(
        path_str.ends_with("scope-finder/config.toml")
            || path_str.ends_with("scope-finder\\config.toml"),
        "Config path should end with scope-finder/config.toml, got: {}",
        path_str
    );
}

// For any malformed TOML the loader returns defaults and a warning.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_malformed_toml_fallback(
        malformed in prop::sample::select(vec![
            "[output\nformat = \"json\"",
            "[output]\nformat = json",
            "[output]\n format",
            "output]\nformat = \"json\"",
            "[output]\nformat = \"json",
        ])
    ) {
        let (_dir, path) = write_config(malformed);
        let result = load_config_from(&path);

        prop_assert!(result.warning.is_some(), "Malformed TOML should warn");
        prop_assert_eq!(result.config.output, OutputConfig::default());
    }
}
