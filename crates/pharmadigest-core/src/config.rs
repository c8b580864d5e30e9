use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::feed::FeedSource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    /// Feed registry, fetched in this order
    #[serde(default = "default_sources")]
    pub sources: Vec<FeedSource>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            sync: SyncConfig::default(),
            sources: default_sources(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory the workbook is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// HTTP proxy URL for feed fetching (e.g., "http://127.0.0.1:7890" or "socks5://127.0.0.1:1080")
    #[serde(default)]
    pub proxy_url: Option<String>,
    /// Look-back window handed to the fetcher
    #[serde(default = "default_days_back")]
    pub days_back: u32,
    /// Drop entries older than `days_back` (off: every entry is reported regardless of age)
    #[serde(default)]
    pub enforce_max_age: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout(),
            proxy_url: None,
            days_back: default_days_back(),
            enforce_max_age: false,
        }
    }
}

fn default_sources() -> Vec<FeedSource> {
    vec![
        FeedSource::new("FierceBiotech", "https://www.fiercebiotech.com/rss/xml"),
        FeedSource::new("BioPharma Dive", "https://www.biopharmadive.com/feeds/news/"),
        FeedSource::new("GEN News", "https://www.genengnews.com/feed/"),
        FeedSource::new("BioSpace", "https://www.biospace.com/feed/"),
    ]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_days_back() -> u32 {
    30
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.sources.is_empty() {
            return Err(crate::Error::Config("at least one feed source is required".to_string()));
        }

        for (idx, source) in self.sources.iter().enumerate() {
            if self.sources[..idx].iter().any(|s| s.name == source.name) {
                return Err(crate::Error::Config(format!(
                    "duplicate feed source name: {}",
                    source.name
                )));
            }
        }

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pharmadigest/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pharmadigest")
            .join("config.toml")
    }

    /// Get the output directory (with tilde expansion)
    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.general.output_dir)
    }

    /// Names of the configured sources, in registry order
    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name.clone()).collect()
    }
}
