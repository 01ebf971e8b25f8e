//! Content loading
//!
//! A document comes either from a local Markdown file or from a GitHub URL.
//! In URL mode the URL string itself is the document unless raw fetching is
//! switched on.

pub mod github;

use std::{fs, path::PathBuf};

use reqwest::{Client, Url};

use crate::{
    config::RefactorConfig,
    error::{MdRefactorError, Result},
};

/// Where the document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Local Markdown file
    File(PathBuf),

    /// GitHub URL
    GitHub {
        url: Url,
        /// String exactly as given on the command line
        literal: String,
        /// Download the file behind a blob URL instead of sending the URL
        fetch_raw: bool,
    },
}

/// Which system prompt a document is sent with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Refactor,
    GitHub,
}

/// Loaded document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub prompt: PromptKind,
}

impl Document {
    /// System prompt for this document under `config`
    #[must_use]
    pub fn system_prompt<'a>(&self, config: &'a RefactorConfig) -> &'a str {
        match self.prompt {
            PromptKind::Refactor => &config.system_prompt,
            PromptKind::GitHub => &config.github_prompt,
        }
    }
}

impl DocumentSource {
    /// Pick the source from the `--input` and `--git` values
    ///
    /// `input` wins when both are given.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if both are empty or the URL is not GitHub
    pub fn resolve(input: Option<&str>, git: Option<&str>, fetch_raw: bool) -> Result<Self> {
        let input = input.filter(|s| !s.is_empty());
        let git = git.filter(|s| !s.is_empty());

        match (input, git) {
            (Some(path), git) => {
                if let Some(url) = git {
                    tracing::warn!(%url, "both --input and --git given, ignoring --git");
                }
                Ok(Self::File(PathBuf::from(path)))
            }
            (None, Some(url)) => Ok(Self::GitHub {
                url: github::validate(url)?,
                literal: url.to_string(),
                fetch_raw,
            }),
            (None, None) => Err(MdRefactorError::ConfigValidation(
                "Input file path or GitHub URL is required (use --input or --git)".to_string(),
            )),
        }
    }

    /// Load the document
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a fetch error in
    /// raw mode
    pub async fn load(&self, client: &Client, config: &RefactorConfig) -> Result<Document> {
        match self {
            Self::File(path) => {
                let bytes = fs::read(path).map_err(|source| MdRefactorError::ReadInput {
                    path: path.clone(),
                    source,
                })?;
                // Invalid UTF-8 (e.g. Latin-1 files) is replaced, not rejected.
                let text = String::from_utf8_lossy(&bytes).into_owned();
                tracing::debug!(path = %path.display(), bytes = text.len(), "read input file");
                Ok(Document {
                    text,
                    prompt: PromptKind::Refactor,
                })
            }
            Self::GitHub {
                url,
                literal,
                fetch_raw,
            } => {
                tracing::info!(url = %url, "Using GitHub URL");
                let text = if *fetch_raw {
                    let raw = github::raw_content_url(url, &config.raw_content_base)?;
                    github::fetch_raw(client, &raw).await?
                } else {
                    literal.clone()
                };
                Ok(Document {
                    text,
                    prompt: PromptKind::GitHub,
                })
            }
        }
    }
}
