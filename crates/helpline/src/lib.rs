//! Helpline Domain Library
//!
//! Core domain types and interfaces for the Helpline support chat.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (ChatRequest, ChatReply)
//!   - `value_objects/`: Immutable value types (ReplySource)
//!   - `services/`: Domain services (StaticMatcher and its keyword catalogue)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (ChatModelProvider)
//!
//! # Usage
//!
//! ```rust,ignore
//! use helpline::StaticMatcher;
//! use helpline::domain::services::catalogue::HOURS_REPLY;
//!
//! let matcher = StaticMatcher::default();
//! assert_eq!(matcher.match_message("what are your hours"), HOURS_REPLY);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CategoryRule, ChatReply, ChatRequest, DomainError, KeywordEntry, MatchKind, ReplySource,
    StaticMatch, StaticMatcher, DEFAULT_REPLY,
};
pub use ports::{
    ChatMessage, ChatModelProvider, CompletionOptions, CompletionResponse, MessageRole,
    ProviderError, TokenUsage,
};
