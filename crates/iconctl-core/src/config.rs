use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry policy parameters for the fetcher (optional `[fetch.retry]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per identifier (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.5,
            max_delay_secs: 10,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        let max_delay = Duration::from_secs(cfg.max_delay_secs);
        // Infinite or out-of-range values fall back to the cap; NaN clamps to zero.
        let base_delay =
            Duration::try_from_secs_f64(cfg.base_delay_secs.max(0.0)).unwrap_or(max_delay);
        Self {
            max_attempts: cfg.max_attempts.max(1),
            base_delay: base_delay.min(max_delay),
            max_delay,
        }
    }
}

/// CDN download settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Resource URL; `{id}` is replaced by the identifier.
    pub url_template: String,
    /// First identifier requested.
    pub start_id: u64,
    /// Optional inclusive upper bound; `None` scans until the first miss.
    pub end_id: Option<u64>,
    /// Optional retry policy; if missing, built-in defaults are used.
    pub retry: Option<RetryConfig>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url_template: "https://cdn.pluggy.ai/assets/connector-icons/{id}.svg".to_string(),
            start_id: 201,
            end_id: None,
            retry: None,
        }
    }
}

impl FetchConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryPolicy::from)
            .unwrap_or_else(|| RetryPolicy::from(&RetryConfig::default()))
    }
}

/// Search engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search page URL; `{query}` is replaced by the form-encoded query.
    pub url_template: String,
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url_template: "https://duckduckgo.com/html/?q={query}".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 20,
        }
    }
}

impl SearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Candidate selection and renaming settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Asset file extension, without the dot.
    pub extension: String,
    /// First query; `{id}` is replaced by the identifier.
    pub primary_query: String,
    /// Fallback query; `{hint}` is replaced by the first hint of the asset.
    pub hint_query: String,
    /// Pause between search attempts and after each rename, in milliseconds.
    pub pause_ms: u64,
    /// Case-insensitive phrases that disqualify a candidate.
    pub stop_phrases: Vec<String>,
    pub min_candidate_len: usize,
    pub max_candidate_len: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            extension: "svg".to_string(),
            primary_query: "pluggy connector {id} svg bank".to_string(),
            hint_query: "{hint} logo".to_string(),
            pause_ms: 1000,
            stop_phrases: [
                "pluggy",
                "connector",
                "connector icons",
                "connector-icons",
                "svg",
                "icon",
                "logo",
                "vector",
                "brand",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            min_candidate_len: 3,
            max_candidate_len: 60,
        }
    }
}

impl NamingConfig {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// Global configuration loaded from `~/.config/iconctl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconctlConfig {
    /// Directory holding the downloaded icons (relative paths resolve against the CWD).
    pub output_dir: PathBuf,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub naming: NamingConfig,
}

impl Default for IconctlConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("connector-icons"),
            fetch: FetchConfig::default(),
            search: SearchConfig::default(),
            naming: NamingConfig::default(),
        }
    }
}

impl IconctlConfig {
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("iconctl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`.
pub fn load_from_path(path: &Path) -> Result<IconctlConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: IconctlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<IconctlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = IconctlConfig::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}
