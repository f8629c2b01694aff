//! Chat Model Port
//!
//! Abstract interface for remote language-model completions.
//! The reply path treats this as an optional capability: it can be absent,
//! swapped for another provider, or replaced with a test double.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Role of a message in a completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// A message sent to the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Options for a completion
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: 150,
            temperature: 0.7,
        }
    }
}

/// Response from a completion
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated text content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics, when the provider reports them
    pub usage: Option<TokenUsage>,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Why a completion produced no usable text
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Provider not configured")]
    NotConfigured,

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Authentication rejected: {0}")]
    Unauthorized(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Completion was empty")]
    EmptyCompletion,
}

impl ProviderError {
    /// Stable label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured => "not_configured",
            ProviderError::Timeout(_) => "timeout",
            ProviderError::Unauthorized(_) => "unauthorized",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::Api { .. } => "api",
            ProviderError::RequestFailed(_) => "request_failed",
            ProviderError::MalformedResponse(_) => "malformed_response",
            ProviderError::EmptyCompletion => "empty_completion",
        }
    }
}

/// Remote chat model interface
///
/// # Example
///
/// ```rust,ignore
/// use helpline::ports::ChatModelProvider;
///
/// struct OpenAiProvider { /* ... */ }
///
/// #[async_trait]
/// impl ChatModelProvider for OpenAiProvider {
///     async fn complete(&self, messages: &[ChatMessage], options: &CompletionOptions)
///         -> Result<CompletionResponse, ProviderError> {
///         // Call the chat completions endpoint
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait ChatModelProvider: Send + Sync {
    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, ProviderError>;

    /// Answer a single user message under a system instruction.
    ///
    /// The returned content is trimmed; blank content is `EmptyCompletion`.
    async fn reply(
        &self,
        system_prompt: &str,
        user_message: &str,
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, ProviderError> {
        let messages = [
            ChatMessage::system(system_prompt),
            ChatMessage::user(user_message),
        ];
        let mut response = self.complete(&messages, options).await?;
        let text = response.content.trim();
        if text.is_empty() {
            return Err(ProviderError::EmptyCompletion);
        }
        response.content = text.to_string();
        Ok(response)
    }

    /// Provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Model ID being used
    fn model_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Canned {
        content: String,
        seen: Mutex<Vec<ChatMessage>>,
    }

    #[async_trait]
    impl ChatModelProvider for Canned {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            _options: &CompletionOptions,
        ) -> Result<CompletionResponse, ProviderError> {
            self.seen.lock().unwrap().extend_from_slice(messages);
            Ok(CompletionResponse {
                content: self.content.clone(),
                model: "canned".to_string(),
                usage: None,
                finish_reason: Some("stop".to_string()),
            })
        }

        fn provider_name(&self) -> &str {
            "canned"
        }

        fn model_id(&self) -> &str {
            "canned"
        }
    }

    fn canned(content: &str) -> Canned {
        Canned {
            content: content.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }

    #[test]
    fn test_default_options() {
        let options = CompletionOptions::default();
        assert_eq!(options.max_tokens, 150);
        assert_eq!(options.temperature, 0.7);
    }

    #[tokio::test]
    async fn test_reply_sends_system_then_user() {
        let provider = canned("  Sure thing.  ");
        let response = provider
            .reply("be nice", "hi", &CompletionOptions::default())
            .await
            .unwrap();

        assert_eq!(response.content, "Sure thing.");
        assert_eq!(response.model, "canned");
        assert_eq!(response.finish_reason.as_deref(), Some("stop"));
        let seen = provider.seen.lock().unwrap();
        assert_eq!(*seen, vec![ChatMessage::system("be nice"), ChatMessage::user("hi")]);
    }

    #[tokio::test]
    async fn test_blank_completion_is_an_error() {
        let provider = canned(" \n ");
        let err = provider
            .reply("be nice", "hi", &CompletionOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "empty_completion");
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let errors = [
            ProviderError::NotConfigured,
            ProviderError::Timeout(std::time::Duration::from_secs(1)),
            ProviderError::Unauthorized("bad key".into()),
            ProviderError::RateLimited,
            ProviderError::Api {
                status: 500,
                message: "boom".into(),
            },
            ProviderError::RequestFailed("dns".into()),
            ProviderError::MalformedResponse("no choices".into()),
            ProviderError::EmptyCompletion,
        ];
        let mut kinds: Vec<_> = errors.iter().map(ProviderError::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }
}
