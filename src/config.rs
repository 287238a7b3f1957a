//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` next to the binary's working
//! directory (override with `CIVIC_CONNECT_CONFIG`) and covers:
//! - Static site metadata (title/description)
//! - Simulated backend latencies

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILE: &str = "config.yaml";
pub const CONFIG_PATH_ENV: &str = "CIVIC_CONNECT_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Static site metadata
    #[serde(default)]
    pub site: SiteConfig,

    /// Simulated backend latencies
    #[serde(default, skip_serializing_if = "Latencies::is_default")]
    pub latencies: Latencies,
}

/// Static site metadata (the portal's only real environment surface).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default = "default_site_description")]
    pub description: String,
}

fn default_site_title() -> String {
    "Resolve Mumbai - Citizen Platform".to_string()
}

fn default_site_description() -> String {
    "Report and resolve civic issues in Mumbai".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            description: default_site_description(),
        }
    }
}

/// Per-operation simulated latencies, in milliseconds.
///
/// Defaults mirror the portal's original fixed delays. Tests inject
/// `Latencies::zero()` (or run under paused tokio time) so no suite ever
/// sleeps for real.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Latencies {
    #[serde(default = "default_auth_ms")]
    pub auth_ms: u64,
    #[serde(default = "default_submit_ms")]
    pub submit_ms: u64,
    #[serde(default = "default_vote_ms")]
    pub vote_ms: u64,
    #[serde(default = "default_comment_ms")]
    pub comment_ms: u64,
    #[serde(default = "default_search_ms")]
    pub search_ms: u64,
    #[serde(default = "default_ai_ms")]
    pub ai_ms: u64,
    #[serde(default = "default_generate_ms")]
    pub generate_ms: u64,
    #[serde(default = "default_preview_ms")]
    pub preview_ms: u64,
    #[serde(default = "default_chat_ms")]
    pub chat_ms: u64,
}

fn default_auth_ms() -> u64 {
    1500
}
fn default_submit_ms() -> u64 {
    1500
}
fn default_vote_ms() -> u64 {
    1500
}
fn default_comment_ms() -> u64 {
    1000
}
fn default_search_ms() -> u64 {
    1000
}
fn default_ai_ms() -> u64 {
    1500
}
fn default_generate_ms() -> u64 {
    2000
}
fn default_preview_ms() -> u64 {
    1500
}
fn default_chat_ms() -> u64 {
    1000
}

impl Default for Latencies {
    fn default() -> Self {
        Self {
            auth_ms: default_auth_ms(),
            submit_ms: default_submit_ms(),
            vote_ms: default_vote_ms(),
            comment_ms: default_comment_ms(),
            search_ms: default_search_ms(),
            ai_ms: default_ai_ms(),
            generate_ms: default_generate_ms(),
            preview_ms: default_preview_ms(),
            chat_ms: default_chat_ms(),
        }
    }
}

impl Latencies {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// All-zero latencies for tests that do not exercise timing.
    pub fn zero() -> Self {
        Self {
            auth_ms: 0,
            submit_ms: 0,
            vote_ms: 0,
            comment_ms: 0,
            search_ms: 0,
            ai_ms: 0,
            generate_ms: 0,
            preview_ms: 0,
            chat_ms: 0,
        }
    }

    pub fn auth(&self) -> Duration {
        Duration::from_millis(self.auth_ms)
    }

    pub fn submit(&self) -> Duration {
        Duration::from_millis(self.submit_ms)
    }

    pub fn vote(&self) -> Duration {
        Duration::from_millis(self.vote_ms)
    }

    pub fn comment(&self) -> Duration {
        Duration::from_millis(self.comment_ms)
    }

    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn ai(&self) -> Duration {
        Duration::from_millis(self.ai_ms)
    }

    pub fn generate(&self) -> Duration {
        Duration::from_millis(self.generate_ms)
    }

    pub fn preview(&self) -> Duration {
        Duration::from_millis(self.preview_ms)
    }

    pub fn chat(&self) -> Duration {
        Duration::from_millis(self.chat_ms)
    }
}

impl Config {
    /// Resolve the config file path, honoring the env override.
    pub fn path() -> PathBuf {
        env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE))
    }

    /// Load configuration from the resolved path, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Serialize and write configuration to the given path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
