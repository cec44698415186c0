use pegrisk_cli::config::{load_config, save_config, visit_counter_path, OutputFormat, PegriskConfig};

#[test]
fn missing_config_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, PegriskConfig::default());
    assert!(config.visit_counter.enabled);
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
fn save_then_load_keeps_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = PegriskConfig::default();
    config.output_format = OutputFormat::Json;
    config.visit_counter.enabled = false;
    save_config(&config, &path).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn unversioned_config_reads_as_current() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"output_format": "json"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(config.visit_counter.enabled);
    assert_eq!(config.visit_counter.path, None);
}

#[test]
fn newer_config_versions_are_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"config_version": 99}"#).unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn counter_defaults_next_to_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let config = PegriskConfig::default();
    assert_eq!(
        visit_counter_path(&config, &config_path),
        dir.path().join("visits.json")
    );
}
