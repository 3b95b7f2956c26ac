//! Per-kind fragment aggregation.

use std::fs;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::LazyLock;

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::fragment::load_fragment;
use super::resolver;
use super::types::{
    FragmentMap,
    ResourceKind,
};

/// Matcher for per-item fragment file names.
static FRAGMENT_GLOB: LazyLock<GlobSet> = LazyLock::new(|| {
    let mut builder = GlobSetBuilder::new();
    if let Ok(glob) = Glob::new("*.json") {
        builder.add(glob);
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
});

/// Build the merged category document for `locale` and `kind`.
///
/// Per-item fragments are merged first, in sorted file-name order, later
/// files overwriting earlier files' duplicate keys (shallow, top-level
/// replacement). The aggregate file, when present, is merged last so its
/// keys always win. Absence of both sources yields an empty mapping.
#[must_use]
pub fn merge_category(root: &Path, locale: &str, kind: ResourceKind) -> FragmentMap {
    let mut merged = FragmentMap::new();

    let dir = resolver::fragment_dir(root, locale, kind);
    for path in fragment_paths(&dir) {
        merge_one(&mut merged, &path);
    }

    if let Some(path) = resolver::aggregate_file(root, locale, kind) {
        merge_one(&mut merged, &path);
    }

    merged
}

/// Merge a single fragment into the accumulator, absorbing load failures.
fn merge_one(merged: &mut FragmentMap, path: &Path) {
    match load_fragment(path) {
        Ok(map) => {
            tracing::debug!(path = %path.display(), keys = map.len(), "Merged fragment");
            merged.extend(map);
        }
        Err(error) => {
            // A broken fragment degrades to "missing" and must not abort
            // the remaining fragments.
            tracing::warn!(path = %path.display(), %error, "Skipping unreadable fragment");
        }
    }
}

/// Enumerate `*.json` fragments in `dir`, sorted by file name.
///
/// Sorting fixes merge precedence among fragments that define the same key.
/// A missing or unreadable directory yields no fragments.
fn fragment_paths(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::debug!(dir = %dir.display(), %error, "No fragment directory to enumerate");
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.file_name().is_some_and(|name| FRAGMENT_GLOB.is_match(name))
        })
        .collect();
    paths.sort();
    paths
}
