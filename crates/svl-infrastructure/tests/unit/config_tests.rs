//! Configuration loading tests

use figment::Jail;
use std::io::Write;
use svl_core::Error;
use svl_infrastructure::config::{
    ConfigLoader, SvlConfig, TraceSinkKind, to_toml, validate_config,
};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

/// Loader that ignores the environment and default locations
fn isolated_loader() -> ConfigLoader {
    ConfigLoader::new()
        .with_env_prefix("SVL_UNIT_TEST_UNUSED")
        .without_discovery()
}

#[test]
fn test_defaults() {
    let config = isolated_loader().load().unwrap();
    assert_eq!(config, SvlConfig::default());
    assert!(!config.registry.detect_cycles);
    assert_eq!(config.registry.trace.sink, TraceSinkKind::Tracing);
    assert_eq!(config.registry.trace.prefix, "[service locator] ");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[registry]
detect_cycles = true

[registry.trace]
sink = "stderr"
prefix = "[di] "

[logging]
level = "debug"
json_format = true
"#,
    );

    let config = isolated_loader().with_config_path(file.path()).load().unwrap();

    assert!(config.registry.detect_cycles);
    assert_eq!(config.registry.trace.sink, TraceSinkKind::Stderr);
    assert_eq!(config.registry.trace.prefix, "[di] ");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = isolated_loader()
        .with_config_path("/definitely/not/here/svl.toml")
        .load()
        .unwrap();
    assert_eq!(config, SvlConfig::default());
}

#[test]
fn test_invalid_log_level_rejected() {
    let file = write_config("[logging]\nlevel = \"loud\"\n");

    let result = isolated_loader().with_config_path(file.path()).load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_malformed_file_rejected() {
    let file = write_config("[registry]\ndetect_cycles = \"sometimes\"\n");

    let result = isolated_loader().with_config_path(file.path()).load();

    match result {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.starts_with("Failed to extract configuration"));
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_empty_stderr_prefix_rejected() {
    let mut config = SvlConfig::default();
    config.registry.trace.sink = TraceSinkKind::Stderr;
    config.registry.trace.prefix = String::new();

    assert!(validate_config(&config).is_err());

    config.registry.trace.sink = TraceSinkKind::None;
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "svl.toml",
            r#"
[registry]
detect_cycles = false

[logging]
level = "warn"
"#,
        )?;
        jail.set_env("SVL_REGISTRY__DETECT_CYCLES", "true");
        jail.set_env("SVL_REGISTRY__TRACE__SINK", "none");

        let config = ConfigLoader::new()
            .with_config_path("svl.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert!(config.registry.detect_cycles);
        assert_eq!(config.registry.trace.sink, TraceSinkKind::None);
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_discovers_config_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file("svl.toml", "[logging]\nlevel = \"trace\"\n")?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "trace");
        Ok(())
    });
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("svl.toml");
    let mut config = SvlConfig::default();
    config.registry.detect_cycles = true;
    config.logging.level = "error".to_string();

    isolated_loader().save_to_file(&config, &path).unwrap();
    let reloaded = isolated_loader().with_config_path(&path).load().unwrap();

    assert_eq!(reloaded, config);
}

#[test]
fn test_to_toml_renders_sections() {
    let rendered = to_toml(&SvlConfig::default()).unwrap();
    assert!(rendered.contains("[registry.trace]"));
    assert!(rendered.contains("sink = \"tracing\""));
    assert!(rendered.contains("[logging]"));
}
