use crate::errors::{AppError, AppResult};
use crate::utils::path::app_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Mail transport settings.
///
/// Every field has a default, so a missing settings file (or a partial one)
/// still yields a usable configuration: plain SMTP on `localhost:25`, sent
/// from `reminder@localhost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_sender")]
    pub sender: String,
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}
fn default_smtp_port() -> u16 {
    25
}
fn default_sender() -> String {
    "reminder@localhost".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            sender: default_sender(),
        }
    }
}

impl Settings {
    /// Return the full path of the default settings file
    pub fn settings_file() -> PathBuf {
        app_dir().join("remind_me.conf")
    }

    /// Load settings from the default location, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::settings_file())
    }

    /// Load settings from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Settings(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // an empty file deserializes to null, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn apply_overrides(
        &mut self,
        host: Option<&str>,
        port: Option<u16>,
        sender: Option<&str>,
    ) {
        if let Some(h) = host {
            self.smtp_host = h.to_string();
        }
        if let Some(p) = port {
            self.smtp_port = p;
        }
        if let Some(s) = sender {
            self.sender = s.to_string();
        }
    }
}
