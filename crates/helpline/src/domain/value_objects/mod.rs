//! Value Objects
//!
//! Immutable types that are defined by their values.

mod reply_source;

pub use reply_source::*;
