use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PegriskConfig {
    /// Schema version. A hand-written config without one is read as current.
    #[serde(default = "current_version")]
    pub config_version: u32,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub visit_counter: VisitCounterConfig,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

impl Default for PegriskConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output_format: OutputFormat::default(),
            visit_counter: VisitCounterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitCounterConfig {
    pub enabled: bool,
    /// Counter file. `None` = `visits.json` next to the config file.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<PathBuf>,
}

impl Default for VisitCounterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("pegrisk"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Resolve where the visit counter lives for this config.
pub fn visit_counter_path(config: &PegriskConfig, config_path: &Path) -> PathBuf {
    match &config.visit_counter.path {
        Some(path) => path.clone(),
        None => config_path
            .parent()
            .map(|dir| dir.join("visits.json"))
            .unwrap_or_else(|| PathBuf::from("visits.json")),
    }
}

/// Load the config at `path`, or the defaults when there is none.
pub fn load_config(path: &Path) -> eyre::Result<PegriskConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(PegriskConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(CURRENT_VERSION, |v| u32::try_from(v).unwrap_or(u32::MAX));

    let migrated = migrate(json, on_disk_version)?;
    let config: PegriskConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Refuse configs written by a newer build.
///
/// Version 1 is the first on-disk shape, so there is nothing to migrate yet.
/// Later shape changes add a step here, e.g. `if from_version < 2 { ... }`.
fn migrate(json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update pegrisk."
        ));
    }
    Ok(json)
}

pub fn save_config(config: &PegriskConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
