//! Bundle provider for a directory of assets on the local filesystem.
//!
//! # Security
//!
//! Every resolved path must stay inside the bundle directory. Absolute names
//! and `..` traversal (e.g. `../../etc/passwd`) are reported as `NotFound`.

use log::warn;
use simres_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Loads bundled files from a directory.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
    /// Canonicalized root, used for containment checks
    canonical_root: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    /// Creates a provider rooted at `root`.
    ///
    /// The root does not have to exist yet; loads simply fail with `NotFound`
    /// until it does.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let canonical_root = root.canonicalize().ok();
        Self {
            root,
            canonical_root,
        }
    }

    /// Returns the bundle directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` inside the bundle, or `None` if it would escape it.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        if relative.is_absolute() {
            return None;
        }
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        let full_path = self.root.join(relative);

        // Symlinks may still point outside the root.
        let Ok(canonical) = full_path.canonicalize() else {
            return Some(full_path);
        };
        let late_root;
        let root = match &self.canonical_root {
            Some(root) => root,
            // The root was created after `new`.
            None => {
                late_root = self.root.canonicalize().ok()?;
                &late_root
            }
        };
        canonical.starts_with(root).then_some(canonical)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self.resolve(path).ok_or_else(|| {
            warn!("Blocked bundle path outside {}: {}", self.root.display(), path);
            ResourceError::NotFound(format!("{} (outside bundle directory)", path))
        })?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn base_path(&self) -> Option<&str> {
        self.root.to_str()
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
