//! Domain Services
//!
//! Stateless logic that operates on domain values.

pub mod catalogue;
mod static_matcher;

pub use catalogue::DEFAULT_REPLY;
pub use static_matcher::*;
