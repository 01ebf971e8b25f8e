//! Configuration management for mdrefactor
//!
//! Values are layered, highest priority first:
//! 1. CLI parameters
//! 2. Environment variables (`OPENAI_API_KEY`, `MDREFACTOR_CONFIG`)
//! 3. Settings file (`<config_dir>/mdrefactor/config.json`)
//! 4. Built-in defaults
//!
//! The API key is never taken from the settings file.

pub mod settings;

use std::{path::PathBuf, time::Duration};

pub use self::settings::Settings;

/// Chat-completion endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Model used when nothing else is configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// System prompt for refactoring a Markdown file
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant that refactors Markdown content. Please improve its structure, clarity, and formatting while preserving the original meaning.";

/// System prompt for writing a README from a GitHub URL
pub const DEFAULT_GITHUB_PROMPT: &str = "You are a helpful assistant that reads a GitHub repository and writes a Markdown README file. Please explain how to use the repository and what is important for a new user to know about it.";

/// Host serving raw file contents for GitHub repositories
pub const DEFAULT_RAW_CONTENT_BASE: &str = "https://raw.githubusercontent.com";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Immutable run configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefactorConfig {
    /// Full URL of the chat-completion endpoint
    pub endpoint: String,

    /// Model name sent with the request
    pub model: String,

    /// System prompt for file input
    pub system_prompt: String,

    /// System prompt for GitHub URL input
    pub github_prompt: String,

    /// Bound on every HTTP request
    pub timeout: Duration,

    /// Base URL that GitHub blob URLs are rewritten against
    pub raw_content_base: String,
}

impl Default for RefactorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            github_prompt: DEFAULT_GITHUB_PROMPT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            raw_content_base: DEFAULT_RAW_CONTENT_BASE.to_string(),
        }
    }
}

impl RefactorConfig {
    /// Defaults overridden by whatever the settings file sets
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let default = Self::default();
        Self {
            endpoint: settings.endpoint.clone().unwrap_or(default.endpoint),
            model: settings.model.clone().unwrap_or(default.model),
            system_prompt: settings
                .system_prompt
                .clone()
                .unwrap_or(default.system_prompt),
            github_prompt: settings
                .github_prompt
                .clone()
                .unwrap_or(default.github_prompt),
            timeout: settings
                .timeout_secs
                .map_or(default.timeout, Duration::from_secs),
            raw_content_base: settings
                .raw_content_base
                .clone()
                .unwrap_or(default.raw_content_base),
        }
    }

    /// Get the configuration directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mdrefactor")
    }

    /// Get the default settings file path
    #[must_use]
    pub fn settings_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }
}
