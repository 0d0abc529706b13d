//! Config file handling.
//!
//! A single `config.toml` under the platform config directory stores the
//! API base URL. Resolution order for the effective URL: `--api-url` flag,
//! `CREWDIR_API_URL` environment variable, config file, built-in default.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Resolve the config directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CREWDIR_PATH environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.crewdir (fallback for systems without XDG)
pub fn resolve_config_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CREWDIR_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("crewdir"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".crewdir"));
    }

    Err(anyhow!(
        "could not determine config path: no HOME directory or XDG config directory found"
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

pub fn config_file(config_dir: &Path) -> PathBuf {
    config_dir.join("config.toml")
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Effective API base URL for this invocation.
pub fn resolve_api_url(flag: Option<String>, config: &Config) -> String {
    flag.or_else(|| std::env::var("CREWDIR_API_URL").ok())
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
