//! Translation data type definitions.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// One translation mapping as loaded from a single JSON file.
///
/// Values are passed through opaquely; nested structures stay nested.
pub type FragmentMap = serde_json::Map<String, serde_json::Value>;

/// The three resource kinds served to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Node labels (`Nodes/` fragments, no aggregate file).
    Nodes,
    /// Node category labels (`Categories/` fragments + `NodeCategory.json`).
    Categories,
    /// Menu labels (`Menus/` fragments + `Menu.json`).
    Menus,
}

impl ResourceKind {
    /// Name of the per-item fragment directory under a locale directory.
    #[must_use]
    pub const fn fragment_dir(self) -> &'static str {
        match self {
            Self::Nodes => "Nodes",
            Self::Categories => "Categories",
            Self::Menus => "Menus",
        }
    }

    /// File name of the flat aggregate file, if this kind has one.
    ///
    /// The aggregate file is merged last, so its keys win over per-item
    /// fragment keys.
    #[must_use]
    pub const fn aggregate_file(self) -> Option<&'static str> {
        match self {
            Self::Nodes => None,
            Self::Categories => Some("NodeCategory.json"),
            Self::Menus => Some("Menu.json"),
        }
    }
}

/// The compiled translation document for one locale.
///
/// Serializes to exactly three keys: `Nodes`, `NodeCategory`, `Menu`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslationBundle {
    pub nodes: FragmentMap,
    pub node_category: FragmentMap,
    pub menu: FragmentMap,
}

/// Failure to load a single translation fragment.
///
/// Mergers absorb all of these into "this fragment contributes nothing";
/// the variants exist so the absorption point can log what actually
/// happened.
#[derive(Error, Debug)]
pub enum FragmentError {
    /// The fragment file does not exist.
    #[error("fragment file not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The fragment file exists but could not be read.
    #[error("failed to read fragment {path}: {source}")]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The fragment bytes did not decode to a JSON object under any
    /// supported encoding.
    #[error("fragment {path} is not a JSON object in any supported encoding")]
    Parse {
        /// Path that was requested.
        path: PathBuf,
    },
}
