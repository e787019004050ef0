use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_vehicle")]
    pub default_vehicle: String,
    #[serde(default = "default_engine")]
    pub default_engine: String,
    #[serde(default = "default_fuel")]
    pub default_fuel: String,
    #[serde(default = "default_fuel_price")]
    pub default_fuel_price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_chat_log")]
    pub chat_log: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_vehicle() -> String {
    "Sedan".to_string()
}
fn default_engine() -> String {
    "4-cylinder".to_string()
}
fn default_fuel() -> String {
    "Gas".to_string()
}
fn default_fuel_price() -> f64 {
    3.50
}
fn default_currency() -> String {
    "$".to_string()
}
fn default_chat_log() -> String {
    Config::config_dir()
        .join("chat_log.txt")
        .to_string_lossy()
        .to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_vehicle: default_vehicle(),
            default_engine: default_engine(),
            default_fuel: default_fuel(),
            default_fuel_price: default_fuel_price(),
            currency: default_currency(),
            chat_log: default_chat_log(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("sparktracker")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".sparktracker")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sparktracker.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("sparktracker.sqlite")
    }

    /// Where a `--db` value points: `~/` is expanded, other relative names
    /// live in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Create the config directory, the config file (unless `is_test`) and an
    /// empty database file. Returns the resolved database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
