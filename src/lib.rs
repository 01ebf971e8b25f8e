//! mdrefactor: refactor Markdown documents with a chat-completion model
//!
//! A single pass: resolve flags and settings, load the document, send it to
//! an OpenAI-compatible endpoint, write the first completion back out.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod messages;
pub mod output;
pub mod services;
pub mod source;

// Re-exports for convenience
pub use error::{ErrorKind, MdRefactorError, Result};
