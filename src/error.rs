//! Error types for mdrefactor

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`MdRefactorError`]
pub type Result<T> = std::result::Result<T, MdRefactorError>;

/// Broad classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing key, missing source, bad URL, bad settings file
    Configuration,
    /// Reading the input or writing the output failed
    Io,
    /// The endpoint could not be reached or timed out
    Transport,
    /// The endpoint answered with something unusable
    Protocol,
}

/// Main error type for mdrefactor
#[derive(Debug, Error)]
pub enum MdRefactorError {
    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    ConfigValidation(String),

    /// Settings file parse error
    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// URL given with `--git` is not a GitHub URL
    #[error("Invalid GitHub URL: {0}")]
    InvalidGitHubUrl(String),

    /// Input file could not be read
    #[error("Error reading input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("Error writing output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to parse API response: {source}. Raw response: {body}")]
    MalformedResponse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Non-success status with a body that carried no structured error
    #[error("Unexpected HTTP {status} from {url}: {body}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// Structured error object returned by the API
    #[error("API error: {message} (Type: {}, Code: {})", or_none(.error_type), or_none(.code))]
    Api {
        message: String,
        error_type: Option<String>,
        code: Option<String>,
    },

    /// Successful response without any choice
    #[error("No refactored content received from API. Raw response: {body}")]
    NoChoices { body: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("none")
}

impl MdRefactorError {
    /// Classify the error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigValidation(_) | Self::ConfigParse { .. } | Self::InvalidGitHubUrl(_) => {
                ErrorKind::Configuration
            }
            Self::ReadInput { .. } | Self::WriteOutput { .. } | Self::Io(_) => ErrorKind::Io,
            Self::Http(_) => ErrorKind::Transport,
            Self::MalformedResponse { .. }
            | Self::UnexpectedStatus { .. }
            | Self::Api { .. }
            | Self::NoChoices { .. }
            | Self::Json(_) => ErrorKind::Protocol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_all_fields() {
        let err = MdRefactorError::Api {
            message: "x".to_string(),
            error_type: Some("y".to_string()),
            code: Some("z".to_string()),
        };
        assert_eq!(err.to_string(), "API error: x (Type: y, Code: z)");
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn test_api_error_display_without_code() {
        let err = MdRefactorError::Api {
            message: "quota exceeded".to_string(),
            error_type: None,
            code: None,
        };
        assert_eq!(
            err.to_string(),
            "API error: quota exceeded (Type: none, Code: none)"
        );
    }

    #[test]
    fn test_kinds() {
        let read = MdRefactorError::ReadInput {
            path: PathBuf::from("missing.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        };
        assert_eq!(read.kind(), ErrorKind::Io);
        assert!(read.to_string().contains("missing.md"));

        let config = MdRefactorError::ConfigValidation("no key".to_string());
        assert_eq!(config.kind(), ErrorKind::Configuration);

        let empty = MdRefactorError::NoChoices {
            body: r#"{"choices":[]}"#.to_string(),
        };
        assert_eq!(empty.kind(), ErrorKind::Protocol);
        assert!(empty.to_string().contains(r#"{"choices":[]}"#));
    }
}
