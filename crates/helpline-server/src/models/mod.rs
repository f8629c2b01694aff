//! Helpline Data Models
//!
//! Request/response DTOs for the HTTP API.

mod chat;
mod health;

pub use chat::*;
pub use health::*;
