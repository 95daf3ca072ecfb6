// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine configuration: turn budget, refresh cadence, warning window.
//!
//! Loaded from a TOML file under the platform config directory, with
//! environment overrides for deployments that configure through the
//! process environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the turn budget, in milliseconds
pub const TURN_TIMEOUT_ENV: &str = "GAMEHUB_TURN_TIMEOUT_MS";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Per-turn budget before forfeit
    #[serde(default = "default_turn_timeout_ms")]
    pub turn_timeout_ms: u64,
    /// Cadence of the countdown display refresh
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
    /// Remaining time at which the one-shot warning ping goes out
    #[serde(default = "default_warning_threshold_ms")]
    pub warning_threshold_ms: u64,
    /// How long a pending challenge-word handshake stays valid
    #[serde(default = "default_challenge_ttl_ms")]
    pub challenge_ttl_ms: u64,
}

fn default_turn_timeout_ms() -> u64 {
    120_000
}

fn default_refresh_interval_ms() -> u64 {
    5_000
}

fn default_warning_threshold_ms() -> u64 {
    15_000
}

fn default_challenge_ttl_ms() -> u64 {
    300_000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            turn_timeout_ms: default_turn_timeout_ms(),
            refresh_interval_ms: default_refresh_interval_ms(),
            warning_threshold_ms: default_warning_threshold_ms(),
            challenge_ttl_ms: default_challenge_ttl_ms(),
        }
    }
}

impl EngineConfig {
    pub fn turn_timeout(&self) -> Duration {
        Duration::from_millis(self.turn_timeout_ms)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn warning_threshold(&self) -> Duration {
        Duration::from_millis(self.warning_threshold_ms)
    }

    pub fn challenge_ttl(&self) -> Duration {
        Duration::from_millis(self.challenge_ttl_ms)
    }

    /// Apply environment overrides; unparseable values are ignored
    pub fn apply_env(mut self) -> Self {
        if let Ok(raw) = std::env::var(TURN_TIMEOUT_ENV) {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => self.turn_timeout_ms = ms,
                _ => tracing::warn!(value = %raw, "ignoring unparseable {TURN_TIMEOUT_ENV}"),
            }
        }
        self
    }
}

/// Path of the config file under the platform config directory
pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("io", "gamehub", "gamehub")
        .context("failed to determine config directory")?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Load the config, writing defaults on first run, then apply
/// environment overrides.
pub fn load_config() -> Result<EngineConfig> {
    let config_path = get_config_path().context("failed to determine config path")?;

    if !config_path.exists() {
        tracing::info!(path = %config_path.display(), "config file not found, writing defaults");
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("failed to create config directory")?;
        }
        let default_config = EngineConfig::default();
        let toml_content =
            toml::to_string_pretty(&default_config).context("failed to serialize default config")?;
        fs::write(&config_path, toml_content).context("failed to write default config file")?;
        return Ok(default_config.apply_env());
    }

    Ok(read_config(&config_path)?.apply_env())
}

/// Read and parse one config file
fn read_config(path: &Path) -> Result<EngineConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))
}
