//! ResourceProvider trait for abstracting where bundled assets live.
//!
//! Simulator assets are addressed by a fixed file name inside a bundle. The
//! bundle may be compiled into the artifact, sit in a directory next to it,
//! or be assembled in memory by a test. Callers only see this trait.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for bundle storage operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared, immutable asset bytes.
pub type SharedResourceData = Arc<Vec<u8>>;

/// A source of bundled asset bytes.
///
/// # Implementations
///
/// - `InMemoryResourceProvider`: pre-populated map, always available
/// - `FilesystemResourceProvider` (simres-resource): a bundle directory on disk
/// - `EmbeddedResourceProvider` (simres-resource): files compiled into the binary
///
/// # Example
///
/// ```ignore
/// let provider = InMemoryResourceProvider::new();
/// provider.add("front.jpg", jpeg_bytes)?;
/// let data = provider.load("front.jpg")?;
/// ```
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a bundled file by its name inside the bundle.
    ///
    /// Returns `ResourceError::NotFound` when the bundle has no such file.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Check whether the bundle contains a file.
    fn exists(&self, path: &str) -> bool;

    /// Root the provider resolves names against, if it has one.
    fn base_path(&self) -> Option<&str> {
        None
    }

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for Arc<P> {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        (**self).load(path)
    }

    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }

    fn base_path(&self) -> Option<&str> {
        (**self).base_path()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// An in-memory bundle.
///
/// Useful for substituting assets in tests without touching the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    files: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` under `path`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        self.add_shared(path, Arc::new(data))
    }

    /// Store already-shared data under `path`.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add_shared(
        &self,
        path: impl Into<String>,
        data: SharedResourceData,
    ) -> Result<(), ResourceError> {
        let path = path.into();
        let mut files = self.files.write().map_err(|_| poisoned(&path))?;
        files.insert(path, data);
        Ok(())
    }

    /// Remove a file. Returns `None` if it was absent or the lock is poisoned.
    pub fn remove(&self, path: &str) -> Option<SharedResourceData> {
        self.files.write().ok()?.remove(path)
    }

    /// Does nothing if the lock is poisoned.
    pub fn clear(&self) {
        if let Ok(mut files) = self.files.write() {
            files.clear();
        }
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.files.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of all stored files, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .files
            .read()
            .map(|f| f.keys().cloned().collect())
            .unwrap_or_default();
        paths.sort();
        paths
    }
}

fn poisoned(path: &str) -> ResourceError {
    ResourceError::LoadFailed {
        path: path.to_string(),
        message: "in-memory bundle lock poisoned".to_string(),
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let files = self.files.read().map_err(|_| poisoned(path))?;
        files
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.files
            .read()
            .map(|f| f.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
