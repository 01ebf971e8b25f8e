//! OpenAI chat-completion client
//!
//! Supports:
//! - OpenAI official API
//! - OpenAI-compatible endpoints (Ollama, LM Studio, etc.) via a custom endpoint URL

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};

use crate::{
    error::{MdRefactorError, Result},
    messages::{ChatRequest, ChatResponse},
};

use super::Refactorer;

/// Client for a single chat-completion endpoint
pub struct OpenAIClient {
    client: Client,
    endpoint: String,
}

impl OpenAIClient {
    /// Create a client posting to `endpoint`, bounding each request by `timeout`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Shared HTTP client, reused for other requests in the same run
    #[must_use]
    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Turn a raw response body into the first choice's content
    fn parse_response(&self, status: reqwest::StatusCode, body: String) -> Result<String> {
        let response: ChatResponse = match serde_json::from_str(&body) {
            Ok(response) => response,
            Err(_) if !status.is_success() => {
                return Err(MdRefactorError::UnexpectedStatus {
                    url: self.endpoint.clone(),
                    status: status.as_u16(),
                    body,
                });
            }
            Err(source) => return Err(MdRefactorError::MalformedResponse { body, source }),
        };

        if let Some(error) = response.error {
            return Err(MdRefactorError::Api {
                message: error.message,
                error_type: error.error_type,
                code: error.code,
            });
        }

        if let Some(usage) = &response.usage {
            tracing::debug!(
                id = response.id.as_deref().unwrap_or_default(),
                model = response.model.as_deref().unwrap_or_default(),
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "token usage"
            );
        }

        let Some(choice) = response.choices.into_iter().next() else {
            return Err(MdRefactorError::NoChoices { body });
        };

        if !status.is_success() {
            tracing::warn!(%status, "API returned a completion with a non-success status");
        }

        tracing::debug!(
            index = choice.index,
            finish_reason = choice.finish_reason.as_deref().unwrap_or_default(),
            "received completion"
        );

        Ok(choice.message.content)
    }
}

#[async_trait]
impl Refactorer for OpenAIClient {
    async fn refactor(
        &self,
        api_key: &str,
        model: &str,
        system_prompt: &str,
        document: &str,
    ) -> Result<String> {
        if api_key.is_empty() {
            return Err(MdRefactorError::ConfigValidation(
                "OpenAI API key is not set. Please set the OPENAI_API_KEY environment variable or use the --apikey flag".to_string(),
            ));
        }

        let request = ChatRequest::refactor(model, system_prompt, document);
        let bearer = header::HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
            MdRefactorError::ConfigValidation("Invalid API key format".to_string())
        })?;

        tracing::info!("Sending content to API for refactoring...");
        tracing::debug!(endpoint = %self.endpoint, model, bytes = document.len(), "posting chat completion");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, bearer)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let content = self.parse_response(status, body)?;

        tracing::info!("Refactoring successful.");
        Ok(content)
    }
}
