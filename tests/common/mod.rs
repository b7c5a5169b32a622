#![allow(dead_code)]

use simulator_resources::SimulatorAsset;
use std::path::PathBuf;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Directory the simulator assets are packaged from.
pub fn packaged_bundle_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/simulator")
}

/// Reads a packaged asset straight from disk, bypassing every provider.
pub fn packaged_bytes(asset: SimulatorAsset) -> Vec<u8> {
    let path = packaged_bundle_dir().join(asset.default_file_name());
    std::fs::read(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
