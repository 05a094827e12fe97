use crate::core::calculator::OpenPunchPolicy;
use crate::errors::{AppError, AppResult};
use crate::store::BackupPolicy;
use crate::utils::path::expand_tilde;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Punch log location; a leading `~/` is expanded.
    pub data_file: String,
    pub backup_suffix: String,
    /// Copy a zero-byte data file aside before overwriting it.
    pub backup_empty_file: bool,
    pub open_punch_policy: OpenPunchPolicy,
    pub show_weekdays: bool,
    pub datetime_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: "~/timeclock.csv".to_string(),
            backup_suffix: ".bak".to_string(),
            backup_empty_file: true,
            open_punch_policy: OpenPunchPolicy::default(),
            show_weekdays: true,
            datetime_format: "%B %d, %Y %H:%M:%S".to_string(),
        }
    }
}

impl Config {
    /// `~/.timeclock`
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timeclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeclock.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;

        debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.data_file.trim().is_empty() {
            return Err(AppError::Config("data_file must not be empty".to_string()));
        }
        if self.backup_suffix.is_empty() {
            return Err(AppError::Config(
                "backup_suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn backup_policy(&self) -> BackupPolicy {
        BackupPolicy {
            suffix: self.backup_suffix.clone(),
            include_empty: self.backup_empty_file,
        }
    }
}
