//! Shared request-handler state.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ConfigStore;
use crate::translation::TranslationCompiler;

/// State shared by all handlers.
///
/// Both members are stateless over the filesystem (the compiler re-reads
/// fragments per request, the store re-reads its backing file per request),
/// so cloning the state per request shares nothing that could go stale.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bundle compiler over the resource root.
    pub compiler: Arc<TranslationCompiler>,
    /// Enabled/disabled switch, backed by `config.json` at the root.
    pub config: Arc<ConfigStore>,
}

impl AppState {
    /// Build the state for a resource root directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config = Arc::new(ConfigStore::new(root.join("config.json")));
        let compiler = Arc::new(TranslationCompiler::new(root));
        Self { compiler, config }
    }
}
