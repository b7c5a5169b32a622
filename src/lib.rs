//! # simulator-resources
//!
//! Fixed photo and video assets for code running in the iOS simulator, where
//! no camera hardware exists.
//!
//! - **simulator**: the bundled front photo, back photo and video (simulator
//!   builds only)
//! - **bundle**: load-once access to those assets over any `ResourceProvider`
//! - **asset**: the asset catalogue and payload format sniffing
//! - **config**: per-bundle file names from `manifest.json`
//! - **error**: error types for bundle loading
//!
//! ## Availability
//!
//! `simulator` is compiled only for iOS simulator targets or when the
//! `simulator` feature is enabled. Elsewhere the module does not exist and
//! [`SIMULATOR_AVAILABLE`] is `false`.

// Re-export foundation crates
pub use simres_resource as resource;
pub use simres_traits as traits;

pub mod asset;
pub mod bundle;
pub mod config;
pub mod device;
pub mod error;

#[cfg(simulator)]
pub mod simulator;

pub use asset::{AssetFormat, AssetKind, SimulatorAsset};
pub use bundle::SimulatorResources;
pub use config::BundleConfig;
pub use device::CaptureDevice;
pub use error::SimulatorResourceError;

pub use resource::{EmbeddedResourceProvider, FilesystemResourceProvider};
pub use traits::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};

#[cfg(simulator)]
pub use simulator::{back_photo_data, front_photo_data, photo_data, video_data};

/// Whether this build carries the simulator assets.
///
/// When it is `false` the accessors do not exist, so this only compiles in
/// simulator builds:
///
#[cfg_attr(simulator, doc = "```")]
#[cfg_attr(not(simulator), doc = "```compile_fail")]
/// let front: &'static [u8] = simulator_resources::simulator::front_photo_data();
/// assert!(!front.is_empty());
/// ```
pub const SIMULATOR_AVAILABLE: bool = cfg!(simulator);
