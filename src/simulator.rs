//! Assets compiled into simulator builds.
//!
//! This module only exists when the crate is built for an iOS simulator
//! target or with the `simulator` feature. Code calling into it has to sit
//! behind the same `cfg`.
//!
//! The accessors never return an error. A bundle missing one of its assets is
//! a packaging defect, so they panic with a message naming the asset.

use crate::asset::SimulatorAsset;
use crate::bundle::SimulatorResources;
use crate::device::CaptureDevice;
use rust_embed::Embed;
use simres_resource::EmbeddedResourceProvider;
use std::sync::LazyLock;

/// Files under `assets/simulator`, embedded at compile time.
#[derive(Embed)]
#[folder = "assets/simulator"]
pub struct BundledAssets;

pub type BundledResources = SimulatorResources<EmbeddedResourceProvider<BundledAssets>>;

static BUNDLED: LazyLock<BundledResources> =
    LazyLock::new(|| SimulatorResources::new(EmbeddedResourceProvider::new("simulator")));

/// The process-wide provider behind the accessors below.
pub fn bundled() -> &'static BundledResources {
    &BUNDLED
}

fn bundled_data(asset: SimulatorAsset) -> &'static [u8] {
    bundled()
        .load(asset)
        .unwrap_or_else(|err| panic!("simulator bundle is misconfigured: {err}"))
}

/// Bytes of the front camera photo.
pub fn front_photo_data() -> &'static [u8] {
    bundled_data(SimulatorAsset::FrontPhoto)
}

/// Bytes of the back camera photo.
pub fn back_photo_data() -> &'static [u8] {
    bundled_data(SimulatorAsset::BackPhoto)
}

/// Bytes of the sample video.
pub fn video_data() -> &'static [u8] {
    bundled_data(SimulatorAsset::Video)
}

/// Photo standing in for a capture from `device`.
pub fn photo_data(device: CaptureDevice) -> &'static [u8] {
    bundled_data(device.photo_asset())
}
