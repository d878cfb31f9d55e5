//! Configuration file handling
//!
//! `makalah.toml` holds an `[oracle]` table and a `[style]` table. Every key
//! is optional; a missing default file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use makalah_core::{PageMargins, StyleSheet};
use makalah_oracle::OracleConfig;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "makalah.toml";

/// Errors loading `makalah.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub oracle: OracleConfig,
    pub style: StyleSheet,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from an explicit path, or from `makalah.toml` in the
    /// working directory when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::read(path)
            }
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if default.exists() {
                    Self::read(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Starter `makalah.toml` with every default spelled out
pub fn starter_config_toml() -> String {
    let oracle = OracleConfig::default();
    let style = StyleSheet::default();
    let m = &style.margins;

    format!(
        "# makalah configuration\n\
         \n\
         [oracle]\n\
         # The API key is read from this environment variable.\n\
         # Setting api_key here takes precedence over it.\n\
         api_key_env = \"{}\"\n\
         model = \"{}\"\n\
         base_url = \"{}\"\n\
         timeout_secs = {}\n\
         deep_thinking_budget = {}\n\
         \n\
         [style]\n\
         font_family = \"{}\"\n\
         # 240 = single, 360 = 1.5 lines\n\
         line_spacing = {}\n\
         \n\
         [style.sizes]\n\
         cover_title = {}\n\
         cover_caption = {}\n\
         heading = {}\n\
         subheading = {}\n\
         body = {}\n\
         \n\
         # Twips: {} cm top, {} cm left\n\
         [style.margins]\n\
         top = {}\n\
         right = {}\n\
         bottom = {}\n\
         left = {}\n\
         \n\
         [style.paragraph_spacing]\n\
         before = {}\n\
         after = {}\n",
        oracle.api_key_env,
        oracle.model,
        oracle.base_url,
        oracle.timeout_secs,
        oracle.deep_thinking_budget,
        style.font_family,
        style.line_spacing,
        style.sizes.cover_title,
        style.sizes.cover_caption,
        style.sizes.heading,
        style.sizes.subheading,
        style.sizes.body,
        PageMargins::to_cm(m.top),
        PageMargins::to_cm(m.left),
        m.top,
        m.right,
        m.bottom,
        m.left,
        style.paragraph_spacing.before,
        style.paragraph_spacing.after,
    )
}
