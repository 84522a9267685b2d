use common::config::{Config, ConfigError, MAX_RECENCY_DAYS, RangeConfig, ReportFormat, ReportStyle};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

#[test]
fn test_missing_sections_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "minimal.yaml", "common:\n  project_name: minimal\n");

    let config = Config::load(dir.path().join("minimal.yaml")).unwrap();

    assert_eq!(config.common.project_name, "minimal");
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.generator.customers, 100);
    assert_eq!(config.ranking.bins, 3);
    assert_eq!(config.recommendation.categories, vec!["prediction"]);
    assert_eq!(config.report.style, ReportStyle::Preview);
    assert_eq!(config.report.format, ReportFormat::Text);
}

#[test]
fn test_includer_overrides_included_values() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir,
        "base.yaml",
        "common:\n  project_name: base\n  log_level: debug\ngenerator:\n  customers: 10\n  seed: 7\n",
    );
    write(
        &dir,
        "store.yaml",
        "!include base.yaml\ngenerator:\n  customers: 1000\nreport:\n  style: store\n  format: json\n",
    );

    let config = Config::load(dir.path().join("store.yaml")).unwrap();

    assert_eq!(config.common.project_name, "base");
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.generator.customers, 1000);
    assert_eq!(config.generator.seed, 7);
    assert_eq!(config.report.style, ReportStyle::Store);
    assert_eq!(config.report.format, ReportFormat::Json);
}

#[test]
fn test_nested_includes_resolve_relative_to_each_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("shared")).unwrap();
    write(&dir, "shared/ranking.yaml", "ranking:\n  bins: 5\n");
    write(
        &dir,
        "shared/common.yaml",
        "!include ranking.yaml\ncommon:\n  project_name: nested\n",
    );
    write(&dir, "top.yaml", "!include shared/common.yaml\n");

    let config = Config::load(dir.path().join("top.yaml")).unwrap();

    assert_eq!(config.common.project_name, "nested");
    assert_eq!(config.ranking.bins, 5);
}

#[test]
fn test_missing_include_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "broken.yaml", "!include nowhere.yaml\n");

    let err = Config::load(dir.path().join("broken.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "unexpected error: {err}");
}

#[test]
fn test_self_include_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "loop.yaml", "!include loop.yaml\nranking:\n  bins: 4\n");

    let err = Config::load(dir.path().join("loop.yaml")).unwrap_err();
    match err {
        ConfigError::Include { include, .. } => assert_eq!(include, "!include loop.yaml"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_include_cycle_through_another_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "a.yaml", "!include b.yaml\ncommon:\n  project_name: a\n");
    write(&dir, "b.yaml", "!include ./a.yaml\nranking:\n  bins: 4\n");

    let err = Config::load(dir.path().join("a.yaml")).unwrap_err();
    match err {
        ConfigError::Include { path, include } => {
            assert!(path.ends_with("b.yaml"), "unexpected includer: {path}");
            assert_eq!(include, "!include ./a.yaml");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_shared_include_from_sibling_files_is_allowed() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "base.yaml", "common:\n  log_level: warn\n");
    write(&dir, "ranking.yaml", "!include base.yaml\nranking:\n  bins: 5\n");
    write(
        &dir,
        "top.yaml",
        "!include base.yaml\n!include ranking.yaml\ncommon:\n  project_name: shared\n",
    );

    let config = Config::load(dir.path().join("top.yaml")).unwrap();

    assert_eq!(config.common.project_name, "shared");
    assert_eq!(config.common.log_level, "warn");
    assert_eq!(config.ranking.bins, 5);
}

#[test]
fn test_empty_generator_range_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir,
        "bad.yaml",
        "generator:\n  frequency:\n    low: 10\n    high: 10\n",
    );

    let err = Config::load(dir.path().join("bad.yaml")).unwrap_err();
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "generator.frequency"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_bins_is_rejected() {
    let mut config = Config::default();
    config.ranking.bins = 0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "ranking.bins", .. })
    ));
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_recency_beyond_supported_horizon_is_rejected() {
    let mut config = Config::default();
    config.generator.recency_days = RangeConfig::new(100_000_000, 100_000_001);

    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "generator.recency_days", .. })
    ));

    config.generator.recency_days = RangeConfig::new(1, MAX_RECENCY_DAYS);
    assert!(config.validate().is_ok());
}
