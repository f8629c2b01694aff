//! Helpline API Routes
//!
//! - / - Chat UI page
//! - /static/js/script.js - Chat UI script
//! - /chat - Reply resolution
//! - /swagger-ui - OpenAPI documentation

pub mod chat;
pub mod page;
pub mod swagger;
