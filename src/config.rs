//! Country list and data path resolution.
//!
//! Built-in defaults, then an optional JSON config file, then CLI flags.
//! Everything downstream takes the resolved `Settings` explicitly.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Current schema version for `config.json`.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

const APP_DIR: &str = "weekly-cases";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_COUNTRIES: [&str; 5] = ["Germany", "Spain", "Italy", "UK", "USA"];

/// On-disk config file. Every field other than the schema version is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub countries: Vec<String>,
    pub data_path: PathBuf,
}

impl Settings {
    /// Defaults with the data file placed relative to `exe_dir`.
    pub fn with_exe_dir(exe_dir: &Path) -> Self {
        Self {
            countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            data_path: exe_dir.join("..").join("data").join("data.json"),
        }
    }

    /// Layer a config file's values over these settings.
    ///
    /// A relative `data_path` is taken relative to the config file's directory.
    pub fn apply_file(&mut self, file: ConfigFile, config_dir: &Path) {
        if let Some(countries) = file.countries {
            self.countries = countries;
        }
        if let Some(data_path) = file.data_path {
            self.data_path = if data_path.is_absolute() {
                data_path
            } else {
                config_dir.join(data_path)
            };
        }
    }
}

/// Resolve settings from defaults, the config file, and the `--data` override.
///
/// An explicit `config_path` must exist; the per-user config file is only read
/// when present.
pub fn resolve_settings(
    config_path: Option<&Path>,
    data_override: Option<&Path>,
) -> Result<Settings> {
    let mut settings = Settings::with_exe_dir(&exe_dir()?);
    let config_path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => user_config_path().filter(|path| path.is_file()),
    };
    if let Some(path) = config_path {
        let file = load_config(&path)?;
        validate_config(&file).with_context(|| format!("invalid config {}", path.display()))?;
        let config_dir = path.parent().unwrap_or_else(|| Path::new("."));
        settings.apply_file(file, config_dir);
        tracing::debug!(path = %path.display(), "applied config file");
    }
    if let Some(data) = data_override {
        settings.data_path = data.to_path_buf();
    }
    tracing::debug!(
        data_path = %settings.data_path.display(),
        countries = settings.countries.len(),
        "resolved settings"
    );
    Ok(settings)
}

/// Load a config file from disk.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: ConfigFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    Ok(config)
}

/// Validate schema version and the country list.
pub fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported config schema_version {} (expected {CONFIG_SCHEMA_VERSION})",
            config.schema_version
        ));
    }
    if let Some(countries) = config.countries.as_deref() {
        validate_countries(countries)?;
    }
    if let Some(path) = config.data_path.as_deref() {
        if path.as_os_str().is_empty() {
            return Err(anyhow!("data_path must be non-empty"));
        }
    }
    Ok(())
}

fn validate_countries(countries: &[String]) -> Result<()> {
    if countries.is_empty() {
        return Err(anyhow!("countries must list at least one country"));
    }
    let mut seen = BTreeSet::new();
    for name in countries {
        if name.trim().is_empty() {
            return Err(anyhow!("countries entries must be non-blank"));
        }
        if !seen.insert(name.as_str()) {
            return Err(anyhow!("duplicate country {name:?}"));
        }
    }
    Ok(())
}

fn exe_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("locate running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe.display()))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
