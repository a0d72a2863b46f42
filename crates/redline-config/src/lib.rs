use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for redline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub editor: EditorConfig,
}

/// Where the redaction server lives and how to reach it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_preview_path")]
    pub preview_path: String,

    #[serde(default = "default_update_path")]
    pub update_path: String,

    #[serde(default = "default_search_path")]
    pub search_path: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Cap on ad-hoc term slots per page
    #[serde(default = "default_max_additional_terms")]
    pub max_additional_terms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            editor: EditorConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            preview_path: default_preview_path(),
            update_path: default_update_path(),
            search_path: default_search_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_additional_terms: default_max_additional_terms(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_preview_path() -> String {
    "/preview".to_string()
}

fn default_update_path() -> String {
    "/update_redaction".to_string()
}

fn default_search_path() -> String {
    "/search".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("redline/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_additional_terms() -> u32 {
    3
}

impl ServerConfig {
    /// Join the base URL with an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "redline", "redline") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.redline/config.toml")
        }
    }
}
