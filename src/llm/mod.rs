//! LLM integration for mailsift.
//!
//! The remote capability is any OpenAI-compatible chat-completions
//! endpoint, reached through the `LlmProvider` trait so the engine and
//! tests never touch HTTP directly.

mod openai;
pub mod provider;
pub(crate) mod retry;

pub use openai::OpenAiProvider;
pub use provider::*;
pub use retry::RetryPolicy;

use std::sync::Arc;

use crate::error::LlmError;

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: secrecy::SecretString,
    pub model: String,
    pub base_url: String,
}

/// Create an LLM provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let provider = OpenAiProvider::new(
        config.api_key.clone(),
        config.model.clone(),
        config.base_url.clone(),
    )?;
    tracing::info!("Using remote classifier (model: {})", config.model);
    Ok(Arc::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_provider_with_any_key() {
        // Construction never fails on credentials — auth errors happen at
        // request time.
        let config = LlmConfig {
            api_key: secrecy::SecretString::from("test-key"),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com".to_string(),
        };
        let provider = create_provider(&config);
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().model_name(), "gpt-4o-mini");
    }
}
