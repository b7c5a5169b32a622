use crate::asset::{AssetFormat, AssetKind, SimulatorAsset};
use simres_traits::ResourceError;
use thiserror::Error;

/// Errors raised while loading simulator assets from a bundle.
#[derive(Error, Debug)]
pub enum SimulatorResourceError {
    #[error("Simulator asset '{asset}' is missing from the bundle (expected file '{file}')")]
    Missing { asset: SimulatorAsset, file: String },

    #[error("Simulator asset '{asset}' is empty")]
    Empty { asset: SimulatorAsset },

    #[error(
        "Simulator asset '{asset}' should be a {expected} payload, found {}",
        describe_found(.found)
    )]
    UnexpectedFormat {
        asset: SimulatorAsset,
        expected: AssetKind,
        found: Option<AssetFormat>,
    },

    #[error("Failed to load simulator asset '{asset}': {source}")]
    Resource {
        asset: SimulatorAsset,
        #[source]
        source: ResourceError,
    },

    #[error("Invalid bundle configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse bundle manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

fn describe_found(found: &Option<AssetFormat>) -> String {
    match found {
        Some(format) => format!("{format} data"),
        None => "unrecognised data".to_string(),
    }
}

impl SimulatorResourceError {
    /// Maps a provider failure for `asset` stored under `file`.
    pub(crate) fn from_resource(asset: SimulatorAsset, file: &str, err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound(_) => SimulatorResourceError::Missing {
                asset,
                file: file.to_string(),
            },
            source => SimulatorResourceError::Resource { asset, source },
        }
    }
}
