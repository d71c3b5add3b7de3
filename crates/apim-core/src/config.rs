use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/apim/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApimConfig {
    /// Default base URL for the `get` command when `--base-url` is not given.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Connect timeout in seconds for each request.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds (connect + transfer).
    pub request_timeout_secs: u64,
}

impl Default for ApimConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            connect_timeout_secs: 15,
            request_timeout_secs: 60,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("apim")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ApimConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ApimConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ApimConfig = toml::from_str(&data)?;
    Ok(cfg)
}
