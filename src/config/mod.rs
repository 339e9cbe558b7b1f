//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::dispatch::DispatchSettings;

/// Directory holding `config.toml` and `data.db`
pub const BARO_DIR: &str = ".baro";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub services: ServicesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantConfig {
    /// Weather location when the command names none
    #[serde(default = "default_fallback_city")]
    pub fallback_city: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            fallback_city: default_fallback_city(),
        }
    }
}

fn default_fallback_city() -> String {
    "La Habana".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Knowledge threshold for recognized questions
    #[serde(default = "default_question_threshold")]
    pub question_threshold: f64,

    /// Knowledge threshold for free text
    #[serde(default = "default_fallback_threshold")]
    pub fallback_threshold: f64,

    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            question_threshold: default_question_threshold(),
            fallback_threshold: default_fallback_threshold(),
            default_limit: default_limit(),
        }
    }
}

fn default_question_threshold() -> f64 {
    0.6
}

fn default_fallback_threshold() -> f64 {
    0.5
}

fn default_limit() -> usize {
    10
}

/// External collaborators
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServicesConfig {
    /// Never touch the network
    #[serde(default)]
    pub offline: bool,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Wikipedia language edition
    #[serde(default = "default_wikipedia_lang")]
    pub wikipedia_lang: String,

    /// Desktop calculator to launch
    #[serde(default = "default_calculator_command")]
    pub calculator_command: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            offline: false,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            wikipedia_lang: default_wikipedia_lang(),
            calculator_command: default_calculator_command(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "BaroAssistant/2.0".to_string()
}

fn default_wikipedia_lang() -> String {
    "es".to_string()
}

fn default_calculator_command() -> String {
    "gnome-calculator".to_string()
}

impl Config {
    /// Load config from default locations
    pub fn load() -> Result<Self> {
        // Try local config first, then global
        if let Some(local) = Self::find_local_config() {
            return Self::load_from(&local);
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load from an explicit path, or from the default locations
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Dispatcher tunables
    pub fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            fallback_city: self.assistant.fallback_city.clone(),
            question_threshold: self.search.question_threshold,
            fallback_threshold: self.search.fallback_threshold,
        }
    }

    /// Find local .baro/{file} walking up directories
    fn find_local(file: &str) -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let path = current.join(BARO_DIR).join(file);
            if path.exists() {
                return Some(path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Find local .baro/config.toml walking up directories
    pub fn find_local_config() -> Option<PathBuf> {
        Self::find_local("config.toml")
    }

    /// Find local .baro/data.db walking up directories
    pub fn find_local_db() -> Option<PathBuf> {
        Self::find_local("data.db")
    }

    /// Global directory (~/.baro)
    pub fn global_dir() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|d| d.home_dir().join(BARO_DIR))
    }

    /// Get global config path (~/.baro/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|d| d.join("config.toml"))
    }

    /// Get global database path (~/.baro/data.db)
    pub fn global_db_path() -> Option<PathBuf> {
        Self::global_dir().map(|d| d.join("data.db"))
    }

    /// Database path with priority:
    /// 1. BARO_DATABASE env var
    /// 2. Local .baro/data.db (walking up from CWD)
    /// 3. Local .baro/ directory holding a config
    /// 4. Global ~/.baro/data.db
    pub fn data_path(&self) -> PathBuf {
        if let Ok(env_path) = std::env::var("BARO_DATABASE") {
            return PathBuf::from(env_path);
        }

        if let Some(local_db) = Self::find_local_db() {
            return local_db;
        }

        if let Some(dir) = Self::find_local_config().and_then(|c| c.parent().map(Path::to_path_buf))
        {
            return dir.join("data.db");
        }

        if let Some(global) = Self::global_db_path() {
            return global;
        }

        PathBuf::from(BARO_DIR).join("data.db")
    }
}
