//! Load-once access to the simulator assets of a bundle.

use crate::asset::{AssetFormat, SimulatorAsset};
use crate::config::BundleConfig;
use crate::device::CaptureDevice;
use crate::error::SimulatorResourceError;
use log::{debug, trace, warn};
use simres_resource::FilesystemResourceProvider;
use simres_traits::{ResourceProvider, SharedResourceData};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Serves the three simulator assets from a [`ResourceProvider`].
///
/// Each asset is read through the provider at most once per instance. Later
/// calls return the cached bytes, so repeated reads are byte-identical and
/// share one allocation. Concurrent first reads may both hit the provider,
/// but only one result is kept and every caller observes that one.
#[derive(Debug)]
pub struct SimulatorResources<P: ResourceProvider> {
    provider: P,
    config: BundleConfig,
    slots: [OnceLock<SharedResourceData>; 3],
}

impl<P: ResourceProvider> SimulatorResources<P> {
    /// Uses the packaged file names and format validation.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: BundleConfig::default(),
            slots: Default::default(),
        }
    }

    pub fn with_config(provider: P, config: BundleConfig) -> Result<Self, SimulatorResourceError> {
        config.validate()?;
        Ok(Self {
            provider,
            config,
            slots: Default::default(),
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    fn slot(&self, asset: SimulatorAsset) -> &OnceLock<SharedResourceData> {
        let index = match asset {
            SimulatorAsset::FrontPhoto => 0,
            SimulatorAsset::BackPhoto => 1,
            SimulatorAsset::Video => 2,
        };
        &self.slots[index]
    }

    pub fn is_loaded(&self, asset: SimulatorAsset) -> bool {
        self.slot(asset).get().is_some()
    }

    /// Returns the bytes of `asset`, reading the bundle on first use.
    pub fn load(&self, asset: SimulatorAsset) -> Result<&[u8], SimulatorResourceError> {
        self.cached(asset).map(|data| data.as_slice())
    }

    /// Like [`load`](Self::load), but hands out the shared buffer.
    pub fn load_shared(
        &self,
        asset: SimulatorAsset,
    ) -> Result<SharedResourceData, SimulatorResourceError> {
        self.cached(asset).cloned()
    }

    fn cached(&self, asset: SimulatorAsset) -> Result<&SharedResourceData, SimulatorResourceError> {
        let slot = self.slot(asset);
        if let Some(data) = slot.get() {
            trace!("Simulator asset '{}' served from cache", asset);
            return Ok(data);
        }

        let data = self.read(asset)?;
        Ok(slot.get_or_init(|| data))
    }

    fn read(&self, asset: SimulatorAsset) -> Result<SharedResourceData, SimulatorResourceError> {
        let file = self.config.file_name(asset);
        let data = self
            .provider
            .load(file)
            .map_err(|err| SimulatorResourceError::from_resource(asset, file, err))?;
        debug!(
            "Loaded simulator asset '{}' from '{}' via {} ({} bytes)",
            asset,
            file,
            self.provider.name(),
            data.len()
        );

        if data.is_empty() {
            return Err(SimulatorResourceError::Empty { asset });
        }

        if self.config.validate_formats {
            let found = AssetFormat::detect(&data);
            if found.map(AssetFormat::kind) != Some(asset.kind()) {
                warn!(
                    "Simulator asset '{}' ({}) is not a {} payload",
                    asset,
                    file,
                    asset.kind()
                );
                return Err(SimulatorResourceError::UnexpectedFormat {
                    asset,
                    expected: asset.kind(),
                    found,
                });
            }
        }

        Ok(data)
    }

    pub fn try_front_photo_data(&self) -> Result<&[u8], SimulatorResourceError> {
        self.load(SimulatorAsset::FrontPhoto)
    }

    pub fn try_back_photo_data(&self) -> Result<&[u8], SimulatorResourceError> {
        self.load(SimulatorAsset::BackPhoto)
    }

    pub fn try_video_data(&self) -> Result<&[u8], SimulatorResourceError> {
        self.load(SimulatorAsset::Video)
    }

    /// The photo a capture from `device` is substituted with.
    pub fn try_photo_data(&self, device: CaptureDevice) -> Result<&[u8], SimulatorResourceError> {
        self.load(device.photo_asset())
    }

    /// Loads every asset now, stopping at the first one that fails.
    pub fn preload(&self) -> Result<(), SimulatorResourceError> {
        for asset in SimulatorAsset::ALL {
            self.load(asset)?;
        }
        Ok(())
    }

    /// Writes `asset` to `destination`, creating missing parent directories.
    ///
    /// Returns the path written, mirroring how a finished recording is handed
    /// back to the caller as a file.
    pub fn export_asset(
        &self,
        asset: SimulatorAsset,
        destination: impl AsRef<Path>,
    ) -> Result<PathBuf, SimulatorResourceError> {
        let destination = destination.as_ref();
        let data = self.load(asset)?;
        if let Some(parent) = destination.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(destination, data)?;
        debug!(
            "Exported simulator asset '{}' to {} ({} bytes)",
            asset,
            destination.display(),
            data.len()
        );
        Ok(destination.to_path_buf())
    }
}

impl SimulatorResources<FilesystemResourceProvider> {
    /// Opens a bundle directory, honouring its `manifest.json` if present.
    pub fn from_directory(root: impl AsRef<Path>) -> Result<Self, SimulatorResourceError> {
        let root = root.as_ref();
        let manifest = root.join(BundleConfig::MANIFEST_FILE_NAME);
        let config = if manifest.is_file() {
            debug!("Reading bundle manifest {}", manifest.display());
            BundleConfig::from_json(&fs::read_to_string(&manifest)?)?
        } else {
            BundleConfig::default()
        };
        Self::with_config(FilesystemResourceProvider::new(root), config)
    }
}
