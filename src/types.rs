//! Shared types and enums used across seawatch.
//! Includes `AcquisitionMode`, `PixelAlgorithm`, `DataCollection`, the radar
//! acquisition enums, `MosaickingOrder` and `OutputFormat`.
use serde::{Deserialize, Serialize};

/// What the run is looking for. Exactly one is active per run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcquisitionMode {
    /// Oil slicks on Sentinel-1 radar backscatter
    Oil,
    /// Floating debris on Sentinel-2 optical reflectance
    Plastic,
}

impl AcquisitionMode {
    /// Strict, case-insensitive parse. Returns `None` for anything that is
    /// not a known mode name.
    pub fn parse(flag: &str) -> Option<Self> {
        match flag.trim().to_ascii_lowercase().as_str() {
            "oil" => Some(AcquisitionMode::Oil),
            "plastic" => Some(AcquisitionMode::Plastic),
            _ => None,
        }
    }
}

impl Default for AcquisitionMode {
    fn default() -> Self {
        AcquisitionMode::Oil
    }
}

impl std::fmt::Display for AcquisitionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcquisitionMode::Oil => write!(f, "oil"),
            AcquisitionMode::Plastic => write!(f, "plastic"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum PixelAlgorithm {
    /// VV/VH decibel composite with a co/cross ratio channel
    RadarBackscatter,
    /// Floating Debris Index rendered as cyan anomalies
    FloatingDebris,
}

impl std::fmt::Display for PixelAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelAlgorithm::RadarBackscatter => write!(f, "RadarBackscatter"),
            PixelAlgorithm::FloatingDebris => write!(f, "FloatingDebris"),
        }
    }
}

/// Provider product family queried for the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum DataCollection {
    #[serde(rename = "sentinel-1-grd")]
    Sentinel1Grd,
    #[serde(rename = "sentinel-2-l2a")]
    Sentinel2L2a,
}

impl std::fmt::Display for DataCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataCollection::Sentinel1Grd => write!(f, "sentinel-1-grd"),
            DataCollection::Sentinel2L2a => write!(f, "sentinel-2-l2a"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SarAcquisitionMode {
    /// Interferometric Wide swath
    Iw,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SarPolarization {
    /// Dual VV+VH
    Dv,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SarResolution {
    High,
}

/// Provider-side policy for picking among overlapping scenes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MosaickingOrder {
    MostRecent,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    PNG,
}

impl OutputFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::PNG => "image/png",
        }
    }
}
