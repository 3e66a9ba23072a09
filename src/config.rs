// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings are layered: built-in defaults, then `config.toml`, then
//! `SNAP_CHANNELS_*` environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "SNAP_CHANNELS";

/// Keys accepted by `snap-channels config`
pub const KEYS: [&str; 4] = ["default_track", "output", "color", "log_level"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Track hoisted first and assumed for shorthand channels
    pub default_track: Option<String>,
    /// Default output for `sort` (list, tree, json)
    pub output: String,
    /// Colored terminal output
    pub color: bool,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_track: None,
            output: "list".to_string(),
            color: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Look up a setting as a display string
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_track" => Some(self.default_track.clone().unwrap_or_default()),
            "output" => Some(self.output.clone()),
            "color" => Some(self.color.to_string()),
            "log_level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    /// All settings as key/value pairs
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}

/// Default location of the config file
#[must_use]
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("org", "hyperpolymath", "snap-channels")
        .map(|d| d.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".snap-channels.toml"))
}

/// Load configuration from disk and environment, falling back to defaults
///
/// # Errors
///
/// Fails when the file exists but cannot be parsed, or a value has the
/// wrong type.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = path.map_or_else(default_path, Path::to_path_buf);
    debug!("Loading config from {}", path.display());

    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    settings
        .try_deserialize()
        .with_context(|| format!("Invalid config in {}", path.display()))
}

/// Validate a value for `key`
///
/// # Errors
///
/// Fails for unknown keys and values of the wrong shape.
pub fn validate(key: &str, value: &str) -> Result<toml::Value> {
    match key {
        "default_track" => {
            if value.is_empty() || value.contains('/') {
                anyhow::bail!("Invalid track name: '{}'", value);
            }
            Ok(toml::Value::String(value.to_string()))
        }
        "output" => match value {
            "list" | "tree" | "json" => Ok(toml::Value::String(value.to_string())),
            other => anyhow::bail!("Unknown output: {}. Valid: list, tree, json", other),
        },
        "color" => value
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|_| anyhow::anyhow!("color must be true or false, got '{}'", value)),
        "log_level" => match value {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(toml::Value::String(value.to_string())),
            other => anyhow::bail!("Unknown log level: {}. Valid: trace, debug, info, warn, error", other),
        },
        other => anyhow::bail!("Unknown config key: {}. Valid: {}", other, KEYS.join(", ")),
    }
}

/// Persist a single setting to the config file, keeping other settings
///
/// # Errors
///
/// Fails on invalid keys/values or when the file cannot be read or written.
pub fn set(path: &Path, key: &str, value: &str) -> Result<()> {
    let value = validate(key, value)?;

    let mut table: toml::Table = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        content
            .parse()
            .with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        toml::Table::new()
    };

    table.insert(key.to_string(), value);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(&table).context("Failed to serialize config")?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
