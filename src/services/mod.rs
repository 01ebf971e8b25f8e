//! Service layer for the remote chat-completion API
//!
//! The pipeline talks to the API only through [`Refactorer`], so tests can
//! drive it with a stub and the HTTP client stays swappable.

pub mod openai;

use async_trait::async_trait;

use crate::error::Result;

pub use self::openai::OpenAIClient;

/// Something that turns a document into its refactored form
#[async_trait]
pub trait Refactorer: Send + Sync {
    /// Send `document` with `system_prompt` to `model` and return the first completion
    async fn refactor(
        &self,
        api_key: &str,
        model: &str,
        system_prompt: &str,
        document: &str,
    ) -> Result<String>;
}
