//! OpenAI Chat Completions Adapter
//!
//! Implements `ChatModelProvider` against the `/chat/completions` endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use helpline::{
    ChatMessage, ChatModelProvider, CompletionOptions, CompletionResponse, ProviderError,
    TokenUsage,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI chat completion client
#[derive(Clone)]
pub struct OpenAiChatModel {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAiChatModel {
    /// Create a client whose requests give up after `timeout`
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        })
    }

    /// Overrides the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base, e.g. for a compatible proxy
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatModelProvider for OpenAiChatModel {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        parse_completion(&body)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

impl OpenAiChatModel {
    fn map_transport_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout(self.timeout)
        } else {
            ProviderError::RequestFailed(err.to_string())
        }
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

// ============================================
// Helper Functions
// ============================================

/// Turn a 2xx body into a completion, reading `choices[0].message.content`
fn parse_completion(body: &str) -> Result<CompletionResponse, ProviderError> {
    let payload: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    let choice = payload
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::MalformedResponse("no choices returned".to_string()))?;

    let content = choice
        .message
        .content
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or(ProviderError::EmptyCompletion)?;

    Ok(CompletionResponse {
        content,
        model: payload.model.unwrap_or_default(),
        usage: payload.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }),
        finish_reason: choice.finish_reason,
    })
}

fn map_http_error(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
        _ => ProviderError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_completion() {
        let body = json!({
            "id": "chatcmpl-1",
            "model": "gpt-3.5-turbo-0125",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "\n  We open at 9 AM.  " },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 40, "completion_tokens": 6, "total_tokens": 46 }
        })
        .to_string();

        let completion = parse_completion(&body).unwrap();
        assert_eq!(completion.content, "We open at 9 AM.");
        assert_eq!(completion.model, "gpt-3.5-turbo-0125");
        assert_eq!(completion.finish_reason.as_deref(), Some("stop"));
        assert_eq!(completion.usage.unwrap().total_tokens, 46);
    }

    #[test]
    fn test_parse_completion_without_choices() {
        let body = json!({ "choices": [] }).to_string();
        let err = parse_completion(&body).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_completion_not_json() {
        let err = parse_completion("<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.kind(), "malformed_response");
    }

    #[test]
    fn test_parse_completion_null_content() {
        let body = json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        })
        .to_string();
        assert!(matches!(
            parse_completion(&body),
            Err(ProviderError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_map_http_error_unauthorized() {
        let body = json!({ "error": { "message": "Incorrect API key provided" } }).to_string();
        match map_http_error(StatusCode::UNAUTHORIZED, &body) {
            ProviderError::Unauthorized(message) => {
                assert_eq!(message, "Incorrect API key provided")
            }
            other => panic!("Expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_map_http_error_rate_limited() {
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, "{}");
        assert!(matches!(err, ProviderError::RateLimited));
    }

    #[test]
    fn test_map_http_error_plain_body() {
        match map_http_error(StatusCode::BAD_GATEWAY, "upstream down") {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("Expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let messages = [
            ChatMessage::system("be helpful"),
            ChatMessage::user("hours?"),
        ];
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
            max_tokens: 150,
            temperature: 0.7,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["max_tokens"], 150);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hours?");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let model = OpenAiChatModel::new("sk-test", Duration::from_secs(1))
            .unwrap()
            .with_base_url("http://localhost:8080/v1/");
        assert_eq!(model.endpoint(), "http://localhost:8080/v1/chat/completions");
    }
}
