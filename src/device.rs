use crate::asset::SimulatorAsset;

/// Camera position a simulated capture is taken with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaptureDevice {
    #[default]
    FrontCamera,
    BackCamera,
}

impl CaptureDevice {
    /// The bundled photo returned in place of a real capture from this camera.
    pub fn photo_asset(self) -> SimulatorAsset {
        match self {
            CaptureDevice::FrontCamera => SimulatorAsset::FrontPhoto,
            CaptureDevice::BackCamera => SimulatorAsset::BackPhoto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_photo_assets() {
        assert_eq!(CaptureDevice::default(), CaptureDevice::FrontCamera);
        assert_eq!(CaptureDevice::FrontCamera.photo_asset(), SimulatorAsset::FrontPhoto);
        assert_eq!(CaptureDevice::BackCamera.photo_asset(), SimulatorAsset::BackPhoto);
    }
}
