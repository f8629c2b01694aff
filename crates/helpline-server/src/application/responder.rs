//! Responder Application Service (Use Case)
//!
//! Turns a validated chat request into a reply. The remote model is tried
//! first when one is configured; every failure falls back to the static
//! matcher, so resolution itself never fails.

use std::sync::Arc;
use std::time::Duration;

use helpline::{
    ChatModelProvider, ChatReply, ChatRequest, CompletionOptions, CompletionResponse,
    ProviderError, StaticMatcher,
};

pub const SYSTEM_PROMPT: &str = "You are a helpful customer support assistant. Be friendly, professional, and concise. Help with general inquiries about products, services, billing, and support.";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Application service for reply resolution
pub struct Responder {
    matcher: Arc<StaticMatcher>,
    chat_model: Option<Arc<dyn ChatModelProvider>>,
    options: CompletionOptions,
    timeout: Duration,
}

impl Responder {
    pub fn new(
        matcher: Arc<StaticMatcher>,
        chat_model: Option<Arc<dyn ChatModelProvider>>,
    ) -> Self {
        Self {
            matcher,
            chat_model,
            options: CompletionOptions::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Upper bound for a single remote attempt
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_chat_model(&self) -> bool {
        self.chat_model.is_some()
    }

    /// Resolve the reply for a request
    pub async fn resolve(&self, request: &ChatRequest) -> ChatReply {
        let message = request.message();

        match self.ask_chat_model(message).await {
            Ok(response) => return ChatReply::ai(response.content),
            Err(ProviderError::NotConfigured) => {}
            Err(e) => {
                tracing::warn!(error.kind = e.kind(), "Chat model unavailable, using predefined reply: {}", e);
            }
        }

        let found = self.matcher.classify(message);
        tracing::debug!("Predefined reply matched by {}", found.kind);
        ChatReply::predefined(found.reply)
    }

    /// Single attempt, bounded by `timeout`, no retries
    async fn ask_chat_model(&self, message: &str) -> Result<CompletionResponse, ProviderError> {
        let chat_model = self.chat_model.as_ref().ok_or(ProviderError::NotConfigured)?;

        let attempt = chat_model.reply(SYSTEM_PROMPT, message, &self.options);
        let response = tokio::time::timeout(self.timeout, attempt)
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))??;

        tracing::info!(
            provider = chat_model.provider_name(),
            model = %response.model,
            tokens = response.usage.as_ref().map(|u| u.total_tokens),
            finish_reason = response.finish_reason.as_deref(),
            "Reply generated by chat model"
        );

        Ok(response)
    }
}
