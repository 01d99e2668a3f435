use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

/// Connection settings for the booking API, passed explicitly to
/// whoever needs them. Nothing in the crate reads these from ambient
/// process state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Request target of an HTTP-backed booking source.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Credential sent as the X-API-Key header.
    #[serde(default)]
    pub api_key: String,
    /// Request deadline in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Hotel preselected when the CLI gets no --hotel.
    #[serde(default)]
    pub default_hotel: Option<i64>,
}

fn default_base_url() -> String {
    "http://localhost:8069".to_string()
}
fn default_timeout_ms() -> u64 {
    30000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_ms: default_timeout_ms(),
            default_hotel: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("roomgantt")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".roomgantt")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("roomgantt.conf")
    }

    /// Load from the default location; a missing file means defaults.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// Write a default config file, creating the directory as needed.
    /// Test mode skips every filesystem write.
    pub fn init_all(custom_path: Option<PathBuf>, is_test: bool) -> AppResult<PathBuf> {
        let path = custom_path.unwrap_or_else(Self::config_file);

        if !is_test {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }

            let yaml =
                serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }

    /// Problems with the current values, empty when everything is sane.
    pub fn check(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.base_url.trim().is_empty() {
            issues.push("base_url is empty".to_string());
        } else if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            issues.push(format!("base_url '{}' is not an http(s) URL", self.base_url));
        }

        if self.timeout_ms == 0 {
            issues.push("timeout_ms must be greater than 0".to_string());
        }

        if let Some(h) = self.default_hotel
            && h <= 0
        {
            issues.push(format!("default_hotel {} is not a valid hotel id", h));
        }

        issues
    }
}
