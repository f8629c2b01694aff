//! Chat Entities
//!
//! A chat exchange is one request and one reply. Nothing outlives the call.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ReplySource;

/// A user message that passed input validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// Message with surrounding whitespace removed, never empty
    message: String,
}

impl ChatRequest {
    /// Build a request from raw user input.
    ///
    /// Surrounding whitespace is trimmed; nothing else is normalized.
    /// Returns `DomainError::Validation` when nothing is left.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Message is required"));
        }

        Ok(Self {
            message: trimmed.to_string(),
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Final reply for a chat request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub source: ReplySource,
}

impl ChatReply {
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Ai,
        }
    }

    pub fn predefined(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Predefined,
        }
    }
}
