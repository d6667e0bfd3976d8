//! Tests for configuration loading and facade construction from config.

use corrlog::config::BackendKind;
use corrlog::{Config, DiagnosticTarget, Facade, Level};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.parse_level().unwrap(), Level::Info);
    assert!(!config.general.mirror);
    assert_eq!(config.diagnostic_target().unwrap(), DiagnosticTarget::Stderr);
    assert_eq!(config.backend_kind().unwrap(), BackendKind::Terminal);
    assert!(config.channels.is_empty());
}

#[test]
fn full_config_parses() {
    let config = Config::parse(
        r#"
[general]
level = "warn"
mirror = true

[diagnostics]
target = "none"
timestamp_format = "%H:%M:%S"

[backend]
kind = "json"
path = "/tmp/corrlog-test.jsonl"

[channels]
"app::net" = "debug"
"app::noisy" = "off"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_level().unwrap(), Level::Warn);
    assert!(config.general.mirror);
    assert_eq!(config.diagnostic_target().unwrap(), DiagnosticTarget::None);
    assert_eq!(config.backend_kind().unwrap(), BackendKind::Json);
    assert_eq!(
        config.json_path(),
        std::path::PathBuf::from("/tmp/corrlog-test.jsonl")
    );

    let levels = config.channel_levels().unwrap();
    assert_eq!(levels.threshold("app::net.connect"), Some(Level::Debug));
    assert_eq!(levels.threshold("app::noisy.tick"), None);
    assert_eq!(levels.threshold("app::db.query"), Some(Level::Warn));
}

#[test]
fn json_path_expands_tilde() {
    let config = Config::parse("[backend]\npath = \"~/logs/app.jsonl\"").unwrap();
    let path = config.json_path();
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with("logs/app.jsonl"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Config::parse("[general\nlevel = ").unwrap_err();
    assert!(matches!(err, corrlog::Error::ConfigParse(_)));
}

#[test]
fn unknown_values_are_rejected() {
    let config = Config::parse("[general]\nlevel = \"loud\"").unwrap();
    assert!(matches!(
        config.parse_level(),
        Err(corrlog::Error::InvalidLevel(_))
    ));

    let config = Config::parse("[channels]\n\"a\" = \"loud\"").unwrap();
    assert!(config.channel_levels().is_err());

    let config = Config::parse("[backend]\nkind = \"syslog\"").unwrap();
    let err = config.backend_kind().unwrap_err();
    assert_eq!(err.to_string(), "invalid value for backend.kind: syslog");

    let config = Config::parse("[diagnostics]\ntarget = \"pager\"").unwrap();
    assert!(config.diagnostic_target().is_err());
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.general.level, "info");
}

#[test]
fn load_from_reads_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("config.toml");
    fs::write(&path, "[general]\nlevel = \"debug\"\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level().unwrap(), Level::Debug);
}

#[test]
fn facade_from_config_applies_settings() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("out.jsonl");
    let config = Config::parse(&format!(
        "[general]\nlevel = \"warn\"\nmirror = true\n\
         [diagnostics]\ntarget = \"none\"\ntimestamp_format = \"%H:%M\"\n\
         [backend]\nkind = \"json\"\npath = {path:?}\n"
    ))
    .unwrap();

    let facade = Facade::from_config(&config).unwrap();
    assert!(facade.has_backend());
    assert!(facade.mirrors_diagnostics());
    assert_eq!(facade.timestamp_format(), "%H:%M");

    assert!(facade.warn("kept").is_emitted());
    assert!(!facade.info("dropped").is_emitted());
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
}

#[test]
fn facade_from_config_without_backend() {
    let config = Config::parse("[backend]\nkind = \"none\"\n[diagnostics]\ntarget = \"none\"").unwrap();
    let facade = Facade::from_config(&config).unwrap();
    assert!(!facade.has_backend());
    assert_eq!(facade.error("x"), corrlog::LogOutcome::SkippedBackendUnavailable);
    assert!(facade.trace("still traced").is_emitted());
}

#[cfg(not(feature = "log"))]
#[test]
fn log_backend_requires_feature() {
    let config = Config::parse("[backend]\nkind = \"log\"").unwrap();
    assert!(Facade::from_config(&config).is_err());
}

#[test]
fn diagnostic_target_parsing() {
    assert_eq!("STDOUT".parse::<DiagnosticTarget>().unwrap(), DiagnosticTarget::Stdout);
    assert_eq!("off".parse::<DiagnosticTarget>().unwrap(), DiagnosticTarget::None);
}
