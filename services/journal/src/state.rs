use crate::config::Config;
use crate::render::{PageRenderer, RenderError};
use crate::store::JournalStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JournalStore>,
    pub renderer: Arc<PageRenderer>,
    pub agent_id: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, RenderError> {
        Self::with_store(config, Arc::new(JournalStore::new()))
    }

    /// State over an existing store, so callers can keep a handle to it
    pub fn with_store(config: &Config, store: Arc<JournalStore>) -> Result<Self, RenderError> {
        Ok(Self {
            store,
            renderer: Arc::new(PageRenderer::new()?),
            agent_id: Arc::from(config.agent_id.as_str()),
        })
    }
}
