//! Oracle client configuration
//!
//! Read from the `[oracle]` table of `makalah.toml`. The key itself is
//! normally left out of the file and taken from the environment.

use std::fmt;

use makalah_ast::GenerationMode;
use serde::{Deserialize, Serialize};

use crate::error::{OracleError, Result};

pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Settings for the Gemini client
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Explicit API key; takes precedence over `api_key_env`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Thinking budget in tokens for deep mode; quick mode always uses 0
    pub deep_thinking_budget: u32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 120,
            deep_thinking_budget: 10000,
        }
    }
}

impl fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_env", &self.api_key_env)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("deep_thinking_budget", &self.deep_thinking_budget)
            .finish()
    }
}

impl OracleConfig {
    /// The API key from the config, else from the environment
    pub fn resolve_api_key(&self) -> Result<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::resolve_api_key`] with an injectable environment lookup
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let explicit = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        explicit
            .or_else(|| {
                lookup(self.api_key_env.as_str())
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty())
            })
            .ok_or_else(|| OracleError::MissingApiKey(self.api_key_env.clone()))
    }

    /// Thinking budget for a generation mode
    pub fn thinking_budget(&self, mode: GenerationMode) -> u32 {
        if mode.is_deep() {
            self.deep_thinking_budget
        } else {
            0
        }
    }

    /// `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}
