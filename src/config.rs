//! Configuration handling for the TUI

use anyhow::Result;
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Higher Secondary Admission Form";
pub const DEFAULT_LOG_FILTER: &str = "admission_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdmissionConfig {
    /// Heading shown above the form
    pub form_title: Option<String>,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
    /// Date the date-of-birth stepper starts from
    pub dob_start: Option<NaiveDate>,
}

impl AdmissionConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "admission", "admission-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("admission-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path, defaulting when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AdmissionConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn title(&self) -> &str {
        self.form_title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn dob_start(&self) -> NaiveDate {
        self.dob_start
            .or_else(|| NaiveDate::from_ymd_opt(2008, 1, 1))
            .unwrap_or(NaiveDate::MIN)
    }
}
