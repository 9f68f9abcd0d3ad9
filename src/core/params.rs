use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::{
    AcquisitionMode, DataCollection, MosaickingOrder, PixelAlgorithm, SarAcquisitionMode,
    SarPolarization, SarResolution,
};

/// Cloud-cover ceiling, in percent, for optical scenes.
pub const MAX_CLOUD_COVERAGE: u8 = 40;

/// Modality-specific constraints sent with the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalityConstraints {
    Radar {
        acquisition_mode: SarAcquisitionMode,
        polarization: SarPolarization,
        resolution: SarResolution,
        orthorectify: bool,
    },
    Optical {
        /// Percent, 0..=100
        max_cloud_coverage: u8,
    },
}

/// Fully parameterized acquisition descriptor for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionParams {
    pub mode: AcquisitionMode,
    pub algorithm: PixelAlgorithm,
    pub collection: DataCollection,
    pub mosaicking: MosaickingOrder,
    pub constraints: ModalityConstraints,
}

impl AcquisitionParams {
    pub fn for_mode(mode: AcquisitionMode) -> Self {
        match mode {
            AcquisitionMode::Oil => Self {
                mode,
                algorithm: PixelAlgorithm::RadarBackscatter,
                collection: DataCollection::Sentinel1Grd,
                mosaicking: MosaickingOrder::MostRecent,
                constraints: ModalityConstraints::Radar {
                    acquisition_mode: SarAcquisitionMode::Iw,
                    polarization: SarPolarization::Dv,
                    resolution: SarResolution::High,
                    orthorectify: true,
                },
            },
            AcquisitionMode::Plastic => Self {
                mode,
                algorithm: PixelAlgorithm::FloatingDebris,
                collection: DataCollection::Sentinel2L2a,
                mosaicking: MosaickingOrder::MostRecent,
                constraints: ModalityConstraints::Optical {
                    max_cloud_coverage: MAX_CLOUD_COVERAGE,
                },
            },
        }
    }

    /// Select parameters from the raw mode flag.
    pub fn select(flag: Option<&str>) -> Self {
        Self::for_mode(select_mode(flag))
    }
}

impl Default for AcquisitionParams {
    fn default() -> Self {
        Self::for_mode(AcquisitionMode::default())
    }
}

/// Resolve the mode flag. Absent, empty and unrecognized values all select
/// `Oil`; unrecognized ones are reported.
pub fn select_mode(flag: Option<&str>) -> AcquisitionMode {
    match flag.map(str::trim).filter(|s| !s.is_empty()) {
        None => {
            debug!("No detection mode configured, defaulting to oil");
            AcquisitionMode::Oil
        }
        Some(raw) => AcquisitionMode::parse(raw).unwrap_or_else(|| {
            warn!("Unrecognized detection mode {:?}, falling back to oil", raw);
            AcquisitionMode::Oil
        }),
    }
}
