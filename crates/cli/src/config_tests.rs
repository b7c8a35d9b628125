#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("triage.toml");
    std::fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn defaults_cover_every_section() {
    let config = Config::default();
    assert!((config.parallel.mem_per_worker_gb - 3.0).abs() < 1e-9);
    assert_eq!(config.parallel.reserve, "2GB");
    assert!(config.dotnet.excluded_warnings.iter().any(|r| r == "NU1902"));
    assert!(!config.detect.search_upward);
}

#[test]
fn partial_file_merges_over_defaults() {
    let (_temp, path) = write_config("[parallel]\nmem_per_worker_gb = 1.5\n");
    let config = load(&path).unwrap();
    assert!((config.parallel.mem_per_worker_gb - 1.5).abs() < 1e-9);
    // Untouched sections keep their defaults.
    assert_eq!(config.parallel.reserve, "2GB");
    assert!(config.dotnet.excluded_warnings.iter().any(|r| r == "DX1000"));
}

#[test]
fn excluded_warnings_are_overridable() {
    let (_temp, path) = write_config("[dotnet]\nexcluded_warnings = [\"CS0168\"]\n");
    let config = load(&path).unwrap();
    assert_eq!(config.dotnet.excluded_warnings, vec!["CS0168".to_string()]);
}

#[test]
fn release_configuration_parses() {
    let (_temp, path) = write_config("[dotnet]\nconfiguration = \"Release\"\n");
    let config = load(&path).unwrap();
    assert_eq!(config.dotnet.configuration, crate::adapter::BuildConfiguration::Release);
}

#[test]
fn nonpositive_worker_memory_is_rejected() {
    let (_temp, path) = write_config("[parallel]\nmem_per_worker_gb = 0.0\n");
    let err = load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn unparseable_toml_is_a_config_error() {
    let (_temp, path) = write_config("[parallel\n");
    let err = load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn default_template_round_trips() {
    let (_temp, path) = write_config(DEFAULT_CONFIG_TOML);
    assert!(load(&path).is_ok());
}
