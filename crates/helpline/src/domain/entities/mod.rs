//! Domain Entities
//!
//! - ChatRequest: a single user message awaiting a reply
//! - ChatReply: the resolved reply and the path that produced it

mod chat;

pub use chat::*;
