//! Bundle provider backed by files compiled into the binary with `rust-embed`.

use log::debug;
use rust_embed::RustEmbed;
use simres_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Serves files from a `#[derive(Embed)]` folder.
///
/// ```ignore
/// #[derive(rust_embed::Embed)]
/// #[folder = "assets/simulator"]
/// struct BundledAssets;
///
/// let provider = EmbeddedResourceProvider::<BundledAssets>::new("simulator");
/// let bytes = provider.load("front.jpg")?;
/// ```
pub struct EmbeddedResourceProvider<T: RustEmbed> {
    label: &'static str,
    _folder: PhantomData<fn() -> T>,
}

impl<T: RustEmbed> EmbeddedResourceProvider<T> {
    /// `label` names the bundle in error messages and logs.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            _folder: PhantomData,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Every embedded file name, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = T::iter().map(|p| p.into_owned()).collect();
        paths.sort();
        paths
    }
}

impl<T: RustEmbed> fmt::Debug for EmbeddedResourceProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedResourceProvider")
            .field("label", &self.label)
            .finish()
    }
}

impl<T: RustEmbed> ResourceProvider for EmbeddedResourceProvider<T> {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let file = T::get(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{}/{}", self.label, path)))?;
        debug!(
            "Embedded bundle '{}' served '{}' ({} bytes)",
            self.label,
            path,
            file.data.len()
        );
        Ok(Arc::new(file.data.into_owned()))
    }

    fn exists(&self, path: &str) -> bool {
        T::get(path).is_some()
    }

    fn name(&self) -> &'static str {
        "EmbeddedResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_embed::Embed;

    #[derive(Embed)]
    #[folder = "tests/fixtures/bundle"]
    struct Fixture;

    fn provider() -> EmbeddedResourceProvider<Fixture> {
        EmbeddedResourceProvider::new("fixture")
    }

    #[test]
    fn test_embedded_provider_loads_file() {
        let data = provider().load("front.jpg").unwrap();
        assert_eq!(&*data, b"front fixture");
    }

    #[test]
    fn test_embedded_provider_loads_nested_file() {
        let data = provider().load("nested/clip.mp4").unwrap();
        assert_eq!(&*data, b"nested fixture");
    }

    #[test]
    fn test_embedded_provider_not_found_names_bundle() {
        let err = provider().load("back.jpg").unwrap_err();
        match err {
            ResourceError::NotFound(path) => assert_eq!(path, "fixture/back.jpg"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_embedded_provider_exists() {
        let provider = provider();
        assert!(provider.exists("front.jpg"));
        assert!(!provider.exists("video.mp4"));
    }

    #[test]
    fn test_embedded_provider_paths() {
        assert_eq!(provider().paths(), vec!["front.jpg", "nested/clip.mp4"]);
    }

    #[test]
    fn test_embedded_provider_metadata() {
        let provider = provider();
        assert_eq!(provider.name(), "EmbeddedResourceProvider");
        assert_eq!(provider.label(), "fixture");
        assert!(provider.base_path().is_none());
        assert!(format!("{provider:?}").contains("fixture"));
    }
}
