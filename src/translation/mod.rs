//! Locale resolution, fragment merging, and bundle compilation.

mod compiler;
mod fragment;
mod merger;
mod resolver;
mod types;

pub use compiler::TranslationCompiler;
pub use fragment::load_fragment;
pub use merger::merge_category;
pub use resolver::{
    DEFAULT_LOCALE,
    aggregate_file,
    fragment_dir,
};
pub use types::{
    FragmentError,
    FragmentMap,
    ResourceKind,
    TranslationBundle,
};
