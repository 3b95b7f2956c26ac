//! Bundle compilation for a single locale.

use std::path::{
    Path,
    PathBuf,
};

use super::merger::merge_category;
use super::types::{
    ResourceKind,
    TranslationBundle,
};

/// Compiles translation bundles from a resource root directory.
///
/// Holds no state beyond the root path: every [`compile`](Self::compile)
/// call re-reads the filesystem, so the result always reflects the current
/// fragment files.
#[derive(Debug, Clone)]
pub struct TranslationCompiler {
    /// Directory containing one subdirectory per locale code.
    root: PathBuf,
}

impl TranslationCompiler {
    /// Create a compiler over `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The resource root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compile the full bundle for `locale`.
    ///
    /// Infallible: every per-fragment failure has already degraded to an
    /// empty contribution by the time the bundle is assembled.
    #[must_use]
    pub fn compile(&self, locale: &str) -> TranslationBundle {
        tracing::debug!(locale, root = %self.root.display(), "Compiling translation bundle");
        TranslationBundle {
            nodes: merge_category(&self.root, locale, ResourceKind::Nodes),
            node_category: merge_category(&self.root, locale, ResourceKind::Categories),
            menu: merge_category(&self.root, locale, ResourceKind::Menus),
        }
    }
}
