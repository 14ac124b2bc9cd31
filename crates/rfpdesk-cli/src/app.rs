//! Wiring from configuration to the assistant.

use crate::config::Config;
use crate::error::Result;
use rfpdesk_llm::AzureOpenAiProvider;
use rfpdesk_router::Assistant;
use rfpdesk_store::JsonFileStore;
use tracing::debug;

/// The assistant as the binary runs it.
pub type DeskAssistant = Assistant<AzureOpenAiProvider, JsonFileStore>;

/// Persistence at the configured storage file.
pub fn open_store(config: &Config) -> JsonFileStore {
    JsonFileStore::new(&config.storage_file)
}

/// Build an assistant talking to the configured deployment.
///
/// Fails when the endpoint or API key is missing.
pub fn build_assistant(config: &Config) -> Result<DeskAssistant> {
    let provider = AzureOpenAiProvider::new(config.model_settings()?)?;
    debug!(
        "Using deployment '{}', storage {}",
        provider.deployment(),
        config.storage_file.display()
    );
    Ok(Assistant::new(provider, open_store(config), config.extractor.clone())?)
}
