//! Application Layer (Use Cases)
//!
//! Orchestrates domain services and external capabilities.

mod responder;

pub use responder::{Responder, SYSTEM_PROMPT};
