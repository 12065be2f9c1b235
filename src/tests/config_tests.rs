//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    graph::GraphConfig, tree::TreeConfig, AlakaiConfig, ConfigLoader, LogConfig, Validate,
};
use crate::error::config::ConfigError;
use std::fs;
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = AlakaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.tree.indent_width, 4);
    assert!(config.graph.invalidate_on_mutation);
    assert_eq!(config.log.level, "warn");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = AlakaiConfig::default();

    config.tree.indent_width = 0;
    assert!(config.validate().is_err());

    config.tree.indent_width = 17;
    assert!(config.validate().is_err());

    config.tree.indent_width = 16;
    assert!(config.validate().is_ok());

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [tree]
    indent_width = 2

    [graph]
    invalidate_on_mutation = false
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.tree.indent_width, 2);
    assert!(!config.graph.invalidate_on_mutation);

    // Other values should be defaults
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading a YAML configuration file.
#[test]
fn test_load_yaml_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");

    fs::write(&config_path, "log:\n  level: debug\n  json: true\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_YAML");
    let config = loader.load().unwrap();

    assert_eq!(config.log.level, "debug");
    assert!(config.log.json);
    assert_eq!(config.tree, TreeConfig::default());
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_env_test.toml");

    fs::write(&config_path, "[tree]\nindent_width = 2\n").unwrap();

    // Set environment variables with a unique prefix
    std::env::set_var("TEST_ENV__TREE__INDENT_WIDTH", "8");
    std::env::set_var("TEST_ENV__GRAPH__INVALIDATE_ON_MUTATION", "false");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Verify environment variables took precedence
    assert_eq!(config.tree.indent_width, 8);
    assert!(!config.graph.invalidate_on_mutation);

    // Clean up environment variables
    std::env::remove_var("TEST_ENV__TREE__INDENT_WIDTH");
    std::env::remove_var("TEST_ENV__GRAPH__INVALIDATE_ON_MUTATION");
}

/// Test that an out-of-range value in an environment variable is rejected.
#[test]
fn test_env_var_out_of_range() {
    std::env::set_var("TEST_RANGE__TREE__INDENT_WIDTH", "0");

    let loader = ConfigLoader::new(None::<&str>, "TEST_RANGE");
    let result = loader.load();

    std::env::remove_var("TEST_RANGE__TREE__INDENT_WIDTH");

    assert!(matches!(
        result,
        Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "tree.indent_width"
    ));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");

    let config_content = r#"
    [tree
    indent_width = four"
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that a missing file and an unknown extension are reported distinctly.
#[test]
fn test_missing_and_unsupported_files() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.toml");
    let loader = ConfigLoader::new(Some(&missing), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(path)) if path == missing));

    let unsupported = dir.path().join("config.txt");
    fs::write(&unsupported, "").unwrap();
    let loader = ConfigLoader::new(Some(&unsupported), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that generated defaults load back unchanged.
#[test]
fn test_generated_config_round_trips() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("generated.toml");

    fs::write(&config_path, AlakaiConfig::default().to_toml().unwrap()).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_GENERATED");
    assert_eq!(loader.load().unwrap(), AlakaiConfig::default());
}

/// Test that section configs convert into the structure configs.
#[test]
fn test_section_conversions() {
    use crate::data_structures::{AlaGraphConfig, MokuTreeConfig};

    let tree = TreeConfig { indent_width: 6 };
    assert_eq!(MokuTreeConfig::from(&tree).indent_width, 6);

    let graph = GraphConfig {
        invalidate_on_mutation: false,
    };
    assert!(!AlaGraphConfig::from(&graph).invalidate_on_mutation);
}
