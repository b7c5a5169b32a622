//! Bundle providers for simulator assets.
//!
//! Implementations of the `ResourceProvider` trait from simres-traits.
//!
//! ## Available Providers
//!
//! - [`FilesystemResourceProvider`]: a bundle directory on the local filesystem
//! - [`EmbeddedResourceProvider`]: a `rust-embed` folder compiled into the binary
//!
//! ## Re-exports
//!
//! - [`InMemoryResourceProvider`]: pre-populated in-memory bundle

mod embedded;
mod filesystem;

pub use embedded::EmbeddedResourceProvider;
pub use filesystem::FilesystemResourceProvider;

pub use simres_traits::{
    InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData,
};
