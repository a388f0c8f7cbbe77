#![allow(dead_code)]

use scaffolder::{engine::TemplateEngine, generator::Generator, store::TemplateStore};
use tempfile::TempDir;

/// A seeded template store and an output directory, both temporary.
pub struct Workspace {
    pub store_dir: TempDir,
    pub out_dir: TempDir,
    pub generator: Generator,
}

/// Seeds a fresh store and builds a generator on top of it.
pub fn seeded_workspace() -> Workspace {
    let store_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let store = TemplateStore::with_dir(store_dir.path());
    store.ensure_defaults().unwrap();
    let generator = Generator::new(TemplateEngine::new(&store));
    Workspace { store_dir, out_dir, generator }
}

/// Returns true when `text` still holds a `$identifier` or `${identifier}` token.
pub fn has_placeholder_token(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.windows(2).any(|w| {
        w[0] == b'$' && (w[1] == b'{' || w[1] == b'_' || w[1].is_ascii_alphabetic())
    })
}
