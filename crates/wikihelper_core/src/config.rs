//! Application configuration.
//!
//! # Responsibility
//! - Load and validate the JSON settings file (API key, API url, wiki
//!   folder).
//!
//! # Invariants
//! - A missing or placeholder API key is rejected at load time, before any
//!   generation request can be attempted.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Value shipped in the settings template; never a usable key.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_GOES_HERE";

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Configuration load/validation error.
#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read.
    Io(std::io::Error),
    /// Settings file is not valid JSON for [`WikiConfig`].
    Parse(serde_json::Error),
    /// API key is absent, blank, or still the template placeholder.
    MissingApiKey,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings file: {err}"),
            Self::Parse(err) => write!(f, "invalid settings file: {err}"),
            Self::MissingApiKey => write!(
                f,
                "API key is not configured; set `api_key` in the settings file"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::MissingApiKey => None,
        }
    }
}

/// Validated application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WikiConfig {
    /// Bearer token for the generation endpoint.
    pub api_key: String,
    /// Generation endpoint url.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Directory holding one `{project}.md` file per project.
    pub wiki_dir: PathBuf,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl WikiConfig {
    /// Parses and validates settings from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let key = self.api_key.trim();
        if key.is_empty() || key == API_KEY_PLACEHOLDER {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}
