//! Imagery request assembly.
//!
//! `build_request` is a pure function of the acquisition parameters and the
//! invocation time. The region of interest and output size are fixed; the
//! temporal window slides with the clock, so two runs on different days ask
//! for different scenes.
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::params::{AcquisitionParams, ModalityConstraints};
use crate::types::OutputFormat;

/// EPSG:4326 as the provider spells it.
pub const CRS_WGS84: &str = "http://www.opengis.net/def/crs/EPSG/0/4326";

/// Northern Gulf of Mexico, west/south/east/north in degrees.
pub const REGION_OF_INTEREST: SpatialWindow = SpatialWindow {
    west: -89.0,
    south: 28.5,
    east: -88.0,
    north: 29.5,
};

pub const LOOKBACK_DAYS: i64 = 90;
pub const OUTPUT_SIZE: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialWindow {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl SpatialWindow {
    pub fn as_bbox(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

/// Half-open interval [from, to)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TemporalWindow {
    /// The `LOOKBACK_DAYS` days preceding `now`.
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        Self {
            from: now - Duration::days(LOOKBACK_DAYS),
            to: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub params: AcquisitionParams,
    pub evalscript: String,
    pub bbox: SpatialWindow,
    pub time_range: TemporalWindow,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}

pub fn build_request(params: &AcquisitionParams, now: DateTime<Utc>) -> ImageRequest {
    ImageRequest {
        params: *params,
        evalscript: params.algorithm.evalscript(),
        bbox: REGION_OF_INTEREST,
        time_range: TemporalWindow::ending_at(now),
        width: OUTPUT_SIZE,
        height: OUTPUT_SIZE,
        format: OutputFormat::PNG,
    }
}

fn timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl ImageRequest {
    /// Process API request body.
    pub fn to_payload(&self) -> Value {
        let mut data_filter = json!({
            "timeRange": {
                "from": timestamp(&self.time_range.from),
                "to": timestamp(&self.time_range.to),
            },
            "mosaickingOrder": self.params.mosaicking,
        });

        let mut data = json!({
            "type": self.params.collection,
        });

        match self.params.constraints {
            ModalityConstraints::Radar {
                acquisition_mode,
                polarization,
                resolution,
                orthorectify,
            } => {
                data_filter["acquisitionMode"] = json!(acquisition_mode);
                data_filter["polarization"] = json!(polarization);
                data_filter["resolution"] = json!(resolution);
                data["processing"] = json!({ "orthorectify": orthorectify });
            }
            ModalityConstraints::Optical { max_cloud_coverage } => {
                data_filter["maxCloudCoverage"] = json!(max_cloud_coverage);
            }
        }
        data["dataFilter"] = data_filter;

        json!({
            "input": {
                "bounds": {
                    "bbox": self.bbox.as_bbox(),
                    "properties": { "crs": CRS_WGS84 },
                },
                "data": [data],
            },
            "output": {
                "width": self.width,
                "height": self.height,
                "responses": [{
                    "identifier": "default",
                    "format": { "type": self.format.mime_type() },
                }],
            },
            "evalscript": self.evalscript,
        })
    }
}
