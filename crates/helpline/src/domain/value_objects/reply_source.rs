//! ReplySource - which path produced a chat reply

use serde::Serialize;

/// Origin of a reply sent back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReplySource {
    /// Generated by the remote language model
    #[serde(rename = "AI")]
    Ai,
    /// Looked up from the static keyword catalogue
    Predefined,
}

impl std::fmt::Display for ReplySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplySource::Ai => write!(f, "AI"),
            ReplySource::Predefined => write!(f, "Predefined"),
        }
    }
}
