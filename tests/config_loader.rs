use std::io::Write;

use testrun::config::{Config, ConfigError, TargetConfig, ToolConfig};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.tool.program, "go");
    assert_eq!(config.tool.subcommand, "test");
    assert_eq!(config.target.default, "./...");
    assert_eq!(config.target.env_var, "TEST_DIRECTORY");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("testrun/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validation_fails_empty_program() {
    let config = Config {
        tool: ToolConfig {
            program: "  ".to_string(),
            subcommand: "test".to_string(),
        },
        target: TargetConfig::default(),
    };

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("tool.program"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let file = write_config(
        r#"
[tool]
program = "/opt/go/bin/go"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.tool.program, "/opt/go/bin/go");
    assert_eq!(config.tool.subcommand, "test");
    assert_eq!(config.target, TargetConfig::default());
}

#[test]
fn test_load_empty_file_is_default() {
    let file = write_config("");
    assert_eq!(Config::load_from(file.path()).unwrap(), Config::default());
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
[tool]
program = "gotip"
subcommand = "test"

[target]
default = "./internal/..."
env_var = "PKG_DIR"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.tool.program, "gotip");
    assert_eq!(config.target.default, "./internal/...");
    assert_eq!(config.target.env_var, "PKG_DIR");
}

#[test]
fn test_load_invalid_toml_is_parse_error() {
    let file = write_config("[tool\nprogram = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_load_empty_value_is_validation_error() {
    let file = write_config("[target]\nenv_var = \"\"\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
