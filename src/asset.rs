//! The fixed asset catalogue and payload format detection.

use std::fmt;
use std::str::FromStr;

/// One of the three assets shipped with simulator builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulatorAsset {
    FrontPhoto,
    BackPhoto,
    Video,
}

impl SimulatorAsset {
    pub const ALL: [SimulatorAsset; 3] = [
        SimulatorAsset::FrontPhoto,
        SimulatorAsset::BackPhoto,
        SimulatorAsset::Video,
    ];

    /// The well-known name of the asset.
    pub fn name(self) -> &'static str {
        match self {
            SimulatorAsset::FrontPhoto => "front-photo",
            SimulatorAsset::BackPhoto => "back-photo",
            SimulatorAsset::Video => "video",
        }
    }

    /// File the asset is packaged under unless a manifest says otherwise.
    pub fn default_file_name(self) -> &'static str {
        match self {
            SimulatorAsset::FrontPhoto => "front.jpg",
            SimulatorAsset::BackPhoto => "back.jpg",
            SimulatorAsset::Video => "video.mp4",
        }
    }

    pub fn kind(self) -> AssetKind {
        match self {
            SimulatorAsset::FrontPhoto | SimulatorAsset::BackPhoto => AssetKind::Photo,
            SimulatorAsset::Video => AssetKind::Video,
        }
    }
}

impl fmt::Display for SimulatorAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SimulatorAsset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SimulatorAsset::ALL
            .into_iter()
            .find(|asset| asset.name() == s)
            .ok_or_else(|| format!("unknown simulator asset '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Photo,
    Video,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetKind::Photo => "photo",
            AssetKind::Video => "video",
        })
    }
}

/// Container formats recognised from a payload's leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetFormat {
    Jpeg,
    Png,
    Heic,
    Mp4,
    QuickTime,
}

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

impl AssetFormat {
    /// Sniffs the format from magic bytes. ISO base media files (MP4, MOV,
    /// HEIC) are told apart by the major brand of their leading `ftyp` box.
    pub fn detect(data: &[u8]) -> Option<AssetFormat> {
        if data.starts_with(JPEG_MAGIC) {
            return Some(AssetFormat::Jpeg);
        }
        if data.starts_with(PNG_MAGIC) {
            return Some(AssetFormat::Png);
        }
        if data.len() >= 12 && &data[4..8] == b"ftyp" {
            return Some(match &data[8..12] {
                b"heic" | b"heix" | b"mif1" => AssetFormat::Heic,
                b"qt  " => AssetFormat::QuickTime,
                _ => AssetFormat::Mp4,
            });
        }
        None
    }

    pub fn kind(self) -> AssetKind {
        match self {
            AssetFormat::Jpeg | AssetFormat::Png | AssetFormat::Heic => AssetKind::Photo,
            AssetFormat::Mp4 | AssetFormat::QuickTime => AssetKind::Video,
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            AssetFormat::Jpeg => "image/jpeg",
            AssetFormat::Png => "image/png",
            AssetFormat::Heic => "image/heic",
            AssetFormat::Mp4 => "video/mp4",
            AssetFormat::QuickTime => "video/quicktime",
        }
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetFormat::Jpeg => "JPEG",
            AssetFormat::Png => "PNG",
            AssetFormat::Heic => "HEIC",
            AssetFormat::Mp4 => "MPEG-4",
            AssetFormat::QuickTime => "QuickTime",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ftyp(brand: &[u8; 4]) -> Vec<u8> {
        let mut data = vec![0, 0, 0, 0x14];
        data.extend_from_slice(b"ftyp");
        data.extend_from_slice(brand);
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(brand);
        data
    }

    #[test]
    fn test_asset_names_round_trip() {
        for asset in SimulatorAsset::ALL {
            assert_eq!(asset.name().parse::<SimulatorAsset>().unwrap(), asset);
            assert_eq!(asset.to_string(), asset.name());
        }
        assert!("selfie".parse::<SimulatorAsset>().is_err());
    }

    #[test]
    fn test_default_file_names_are_distinct() {
        let names: Vec<_> = SimulatorAsset::ALL
            .iter()
            .map(|a| a.default_file_name())
            .collect();
        assert_eq!(names, vec!["front.jpg", "back.jpg", "video.mp4"]);
    }

    #[test]
    fn test_asset_kinds() {
        assert_eq!(SimulatorAsset::FrontPhoto.kind(), AssetKind::Photo);
        assert_eq!(SimulatorAsset::BackPhoto.kind(), AssetKind::Photo);
        assert_eq!(SimulatorAsset::Video.kind(), AssetKind::Video);
    }

    #[test]
    fn test_detect_images() {
        assert_eq!(
            AssetFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]),
            Some(AssetFormat::Jpeg)
        );
        assert_eq!(
            AssetFormat::detect(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"),
            Some(AssetFormat::Png)
        );
        assert_eq!(AssetFormat::detect(&ftyp(b"heic")), Some(AssetFormat::Heic));
        assert_eq!(AssetFormat::detect(&ftyp(b"mif1")), Some(AssetFormat::Heic));
    }

    #[test]
    fn test_detect_videos() {
        assert_eq!(AssetFormat::detect(&ftyp(b"isom")), Some(AssetFormat::Mp4));
        assert_eq!(AssetFormat::detect(&ftyp(b"mp42")), Some(AssetFormat::Mp4));
        assert_eq!(AssetFormat::detect(&ftyp(b"qt  ")), Some(AssetFormat::QuickTime));
    }

    #[test]
    fn test_detect_rejects_unknown_and_truncated() {
        assert_eq!(AssetFormat::detect(b""), None);
        assert_eq!(AssetFormat::detect(&[0xFF, 0xD8]), None);
        assert_eq!(AssetFormat::detect(b"\0\0\0\x08ftyp"), None);
        assert_eq!(AssetFormat::detect(b"GIF89a......"), None);
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(AssetFormat::Jpeg.media_type(), "image/jpeg");
        assert_eq!(AssetFormat::QuickTime.media_type(), "video/quicktime");
        assert_eq!(AssetFormat::Heic.kind(), AssetKind::Photo);
        assert_eq!(AssetFormat::Mp4.kind(), AssetKind::Video);
        assert_eq!(AssetFormat::Mp4.to_string(), "MPEG-4");
    }
}
