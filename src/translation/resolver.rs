//! Locale resolution with per-kind fallback to the default locale.

use std::path::{
    Path,
    PathBuf,
};

use super::types::ResourceKind;

/// The universal fallback locale. A directory with this name is expected to
/// exist at the resource root and carry the complete reference translations.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Resolve the per-item fragment directory for `locale` and `kind`.
///
/// Returns `root/<locale>/<kind dir>/` when that directory exists, otherwise
/// `root/en_US/<kind dir>/`. The fallback is applied independently for each
/// kind: a locale may carry complete Node translations yet fall back
/// entirely for Menus.
///
/// The returned path is not guaranteed to exist; an absent fallback
/// directory simply yields an empty merge result downstream.
#[must_use]
pub fn fragment_dir(root: &Path, locale: &str, kind: ResourceKind) -> PathBuf {
    let preferred = root.join(locale).join(kind.fragment_dir());
    if preferred.is_dir() {
        return preferred;
    }

    tracing::debug!(
        locale,
        kind = kind.fragment_dir(),
        "No per-item directory for locale, falling back to {DEFAULT_LOCALE}"
    );
    root.join(DEFAULT_LOCALE).join(kind.fragment_dir())
}

/// Resolve the flat aggregate file for `locale` and `kind`, if any exists.
///
/// Prefers `root/<locale>/<name>` and falls back to `root/en_US/<name>`;
/// the fallback here is independent of the per-item directory fallback.
/// Returns `None` for kinds without an aggregate file and when neither
/// candidate exists.
#[must_use]
pub fn aggregate_file(root: &Path, locale: &str, kind: ResourceKind) -> Option<PathBuf> {
    let name = kind.aggregate_file()?;

    let preferred = root.join(locale).join(name);
    if preferred.is_file() {
        return Some(preferred);
    }

    let fallback = root.join(DEFAULT_LOCALE).join(name);
    fallback.is_file().then_some(fallback)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn fragment_dir_prefers_requested_locale() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("zh-CN/Nodes")).unwrap();
        fs::create_dir_all(root.path().join("en_US/Nodes")).unwrap();

        let dir = fragment_dir(root.path(), "zh-CN", ResourceKind::Nodes);

        assert_eq!(dir, root.path().join("zh-CN/Nodes"));
    }

    /// Fallback applies symmetrically to every kind.
    #[rstest]
    #[case(ResourceKind::Nodes)]
    #[case(ResourceKind::Categories)]
    #[case(ResourceKind::Menus)]
    fn fragment_dir_falls_back_per_kind(#[case] kind: ResourceKind) {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("en_US").join(kind.fragment_dir())).unwrap();

        let dir = fragment_dir(root.path(), "fr_FR", kind);

        assert_eq!(dir, root.path().join("en_US").join(kind.fragment_dir()));
    }

    /// Locale codes are used verbatim: case or separator variants are
    /// distinct directories.
    #[rstest]
    fn fragment_dir_does_not_normalize_locale_codes() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("zh-CN/Nodes")).unwrap();

        let dir = fragment_dir(root.path(), "zh_cn", ResourceKind::Nodes);

        assert_eq!(dir, root.path().join("en_US/Nodes"));
    }

    #[rstest]
    fn aggregate_file_prefers_requested_locale() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("zh-CN")).unwrap();
        fs::create_dir_all(root.path().join("en_US")).unwrap();
        fs::write(root.path().join("zh-CN/Menu.json"), "{}").unwrap();
        fs::write(root.path().join("en_US/Menu.json"), "{}").unwrap();

        let path = aggregate_file(root.path(), "zh-CN", ResourceKind::Menus);

        assert_eq!(path, Some(root.path().join("zh-CN/Menu.json")));
    }

    #[rstest]
    fn aggregate_file_falls_back_to_default_locale() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("en_US")).unwrap();
        fs::write(root.path().join("en_US/NodeCategory.json"), "{}").unwrap();

        let path = aggregate_file(root.path(), "zh-CN", ResourceKind::Categories);

        assert_eq!(path, Some(root.path().join("en_US/NodeCategory.json")));
    }

    #[rstest]
    fn aggregate_file_is_none_for_nodes_and_when_absent() {
        let root = TempDir::new().unwrap();

        assert_eq!(aggregate_file(root.path(), "zh-CN", ResourceKind::Nodes), None);
        assert_eq!(aggregate_file(root.path(), "zh-CN", ResourceKind::Menus), None);
    }
}
