use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://open.api.nexon.com/maplestorytw";
pub const API_KEY_ENV: &str = "MSBAO_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

fn default_true() -> bool {
    true
}

fn default_query_interval() -> u64 {
    100
}

fn default_images() -> Vec<String> {
    vec!["image.png".to_string()]
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Settings of the character lookup and experience commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapleConfig {
    pub use_global_whitelist: bool,
    pub self_whitelist: Vec<String>,
    pub query_interval_ms: u64,
    pub images: Vec<String>,
    pub data_path: String,
}

impl MapleConfig {
    /// Directory holding `bindings.json`. Falls back to `./data/msbao`.
    pub fn data_dir(&self) -> PathBuf {
        let trimmed = self.data_path.trim();
        if trimmed.is_empty() {
            PathBuf::from("data").join("msbao")
        } else {
            PathBuf::from(trimmed)
        }
    }
}

impl Default for MapleConfig {
    fn default() -> Self {
        Self {
            use_global_whitelist: true,
            self_whitelist: Vec::new(),
            query_interval_ms: default_query_interval(),
            images: default_images(),
            data_path: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkList {
    pub name: String,
    #[serde(default)]
    pub websites: Vec<String>,
    #[serde(default = "default_true")]
    pub use_global_whitelist: bool,
    #[serde(default)]
    pub self_whitelist: Vec<String>,
}

impl LinkList {
    pub fn new(name: impl Into<String>, websites: Vec<String>) -> Self {
        Self {
            name: name.into(),
            websites,
            use_global_whitelist: true,
            self_whitelist: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub enabled: bool,
    pub lists: Vec<LinkList>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lists: Vec::new(),
        }
    }
}

/// Auto-reply for messages matching `listening`, a case-insensitive pattern.
///
/// Patterns use `regex` crate syntax, which has no lookaround or backreferences.
/// A pattern relying on either fails to compile and the rule is skipped at
/// startup with a warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule {
    pub listening: String,
    pub reply: String,
    #[serde(default)]
    pub use_global_whitelist: bool,
    #[serde(default)]
    pub self_whitelist: Vec<String>,
}

impl KeywordRule {
    pub fn new(listening: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            listening: listening.into(),
            reply: reply.into(),
            use_global_whitelist: false,
            self_whitelist: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub enabled: bool,
    pub keywords: Vec<KeywordRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub enabled: bool,
    pub whitelist_mode: bool,
    pub whitelist: Vec<String>,
    pub admins: Vec<String>,
    pub api_key: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    pub ms: MapleConfig,
    pub url: LinkConfig,
    pub keyword: KeywordConfig,
}

impl BotConfig {
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads the TOML file and applies the `MSBAO_API_KEY` override.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let source = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&source)?;
        config.apply_env_overrides(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key.trim().to_string();
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            whitelist_mode: true,
            whitelist: Vec::new(),
            admins: Vec::new(),
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            ms: MapleConfig::default(),
            url: LinkConfig::default(),
            keyword: KeywordConfig::default(),
        }
    }
}
