//! Template store holding the named template files.
//!
//! The store is a plain directory tree. Built-in templates are seeded into
//! it by [`TemplateStore::ensure_defaults`], which the entry point calls
//! once; constructing a store never touches the filesystem.

use crate::{
    constants::TEMPLATES_DIR_NAME,
    error::{Error, Result},
    ioutils::write_file,
};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Built-in templates as `(relative path, content)` pairs.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("python/package.py", include_str!("../templates/python/package.py")),
    ("python/class.py", include_str!("../templates/python/class.py")),
    ("python/test.py", include_str!("../templates/python/test.py")),
];

/// Manages the on-disk template directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    /// Root directory for the template store.
    root: PathBuf,
}

impl TemplateStore {
    /// Creates a TemplateStore rooted next to the running executable.
    ///
    /// The store is located at `<directory of the executable>/templates`.
    pub fn new() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let install_dir = exe.parent().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Could not determine install directory of '{}'",
                exe.display()
            ))
        })?;
        Ok(Self::with_dir(install_dir.join(TEMPLATES_DIR_NAME)))
    }

    /// Creates a TemplateStore with a custom directory.
    pub fn with_dir<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Returns the path to the store directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes every built-in template that is not already present.
    ///
    /// Existing files are left untouched, so user edits survive repeated
    /// calls. Returns the paths that were created.
    pub fn ensure_defaults(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for (name, content) in BUILTIN_TEMPLATES {
            let path = self.root.join(name);
            if path.exists() {
                debug!("Keeping existing template: {}", path.display());
                continue;
            }
            write_file(content, &path)?;
            info!("Seeded template: {}", path.display());
            created.push(path);
        }
        Ok(created)
    }
}
