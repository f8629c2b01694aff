//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod openai;

use std::sync::Arc;

use helpline::ChatModelProvider;

use crate::config::OpenAiConfig;

// Re-exports
pub use openai::OpenAiChatModel;

/// Build the remote chat model, if credentials allow it.
///
/// A missing, blank or placeholder key yields `None`: the remote path is
/// simply unavailable.
pub fn build_chat_model(
    config: &OpenAiConfig,
) -> Result<Option<Arc<dyn ChatModelProvider>>, reqwest::Error> {
    let Some(api_key) = config.usable_api_key() else {
        return Ok(None);
    };

    let model = OpenAiChatModel::new(api_key, config.timeout)?
        .with_model(&config.model)
        .with_base_url(&config.base_url);

    Ok(Some(Arc::new(model)))
}
