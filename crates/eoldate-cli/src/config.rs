use crate::presentation::view_models::Palette;
use crate::types::ColorChoice;
use anyhow::{Context, Result};
use eoldate_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "EOLDATE_CONFIG";
pub const API_URL_ENV: &str = "EOLDATE_API_URL";

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path
/// 2. EOLDATE_CONFIG environment variable
/// 3. `<config dir>/eol-date/config.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|dir| dir.join("eol-date").join("config.toml"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api: ApiConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Used when `--format` is not given
    pub format: Option<String>,
    pub color: ColorChoice,
    pub palette: PaletteConfig,
}

/// ANSI-256 codes for the table renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub active: u8,
    pub eol: u8,
    pub lts: u8,
    pub dim: u8,
    pub header: u8,
    pub table_header: u8,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            active: palette.active,
            eol: palette.eol,
            lts: palette.lts,
            dim: palette.dim,
            header: palette.header,
            table_header: palette.table_header,
        }
    }
}

impl DisplayConfig {
    /// Palette for one output stream; `choice` is the `--color` override.
    pub fn palette_for(
        &self,
        choice: Option<ColorChoice>,
        stream_is_terminal: bool,
        no_color: bool,
    ) -> Palette {
        let color = choice.unwrap_or(self.color);
        self.palette
            .to_palette(color.enabled(stream_is_terminal, no_color))
    }
}

impl PaletteConfig {
    pub fn to_palette(&self, enabled: bool) -> Palette {
        Palette {
            active: self.active,
            eol: self.eol,
            lts: self.lts,
            dim: self.dim,
            header: self.header,
            table_header: self.table_header,
            enabled,
        }
    }
}

impl Config {
    /// Load the resolved config file, then apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match resolve_config_path(explicit) {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Missing file means defaults; an unreadable or invalid one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn apply_env(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
    }
}
