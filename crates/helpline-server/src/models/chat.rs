//! Chat - request and response bodies for `POST /chat`

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use helpline::{ChatReply, ReplySource};

/// Chat request body
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ChatRequestBody {
    /// User message; blank or missing is rejected
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful chat response
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    #[schema(value_type = String, example = "Predefined")]
    pub source: ReplySource,
    pub success: bool,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            response: reply.text,
            source: reply.source,
            success: true,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: false,
        }
    }
}
