use crate::core::calendar::RangeMode;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// 0-based column indices of the input sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Columns {
    #[serde(default = "default_date_col")]
    pub date: usize,
    #[serde(default = "default_mode_col")]
    pub mode: usize,
    #[serde(default = "default_duration_col")]
    pub duration: usize,
    #[serde(default = "default_distance_col")]
    pub distance: usize,
}

fn default_date_col() -> usize {
    0
}
fn default_mode_col() -> usize {
    2
}
fn default_duration_col() -> usize {
    4
}
fn default_distance_col() -> usize {
    5
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            date: default_date_col(),
            mode: default_mode_col(),
            duration: default_duration_col(),
            distance: default_distance_col(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub columns: Columns,
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    #[serde(default)]
    pub calendar_range: RangeMode,
    #[serde(default)]
    pub sheet: Option<String>,
}

fn default_header_rows() -> usize {
    1
}
fn default_output_suffix() -> String {
    "-result".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: Columns::default(),
            header_rows: default_header_rows(),
            output_suffix: default_output_suffix(),
            calendar_range: RangeMode::default(),
            sheet: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("travelsum")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".travelsum")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("travelsum.conf")
    }

    /// Load configuration from `custom` (or the default location).
    /// A missing file yields the defaults.
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            if custom.is_some() {
                return Err(AppError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file deserializes to `null`, which means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
