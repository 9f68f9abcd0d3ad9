use ndarray::{Array2, Array3, Zip};

use crate::error::{Error, Result};
use crate::types::PixelAlgorithm;

/// 10·log10 scaling folded into a natural log and divided by 20, so that
/// -20 dB lands on 0 after the +1 offset. Kept at full precision for the
/// provider script; the native path narrows it to `f32`.
pub const DB_SCALE: f64 = 0.21714724095;

/// Keeps the co/cross ratio finite when the VH channel clamps to 0.
pub const RATIO_EPSILON: f32 = 0.0001;

/// Sentinel-2 centre wavelengths in micrometres (B04, B08, B11).
pub const RED_WAVELENGTH: f32 = 0.665;
pub const NIR_WAVELENGTH: f32 = 0.842;
pub const SWIR_WAVELENGTH: f32 = 1.610;

/// Visibility gain applied to FDI before rendering. Not physically calibrated.
pub const FDI_GAIN: f32 = 5.0;

/// Linear backscatter to the bounded decibel-like scale: max(0, ln(x)·k + 1).
/// Non-positive and NaN inputs clamp to 0.
pub fn to_db(linear: f32) -> f32 {
    // f32::max returns the non-NaN operand
    (linear.ln() * DB_SCALE as f32 + 1.0).max(0.0)
}

/// Radar composite for one pixel: [db(VV), db(VH), db(VV) / (db(VH) + ε)]
pub fn radar_pixel(vv: f32, vh: f32) -> [f32; 3] {
    let vv_db = to_db(vv);
    let vh_db = to_db(vh);
    [vv_db, vh_db, vv_db / (vh_db + RATIO_EPSILON)]
}

/// Wavelength-proportional position of NIR between Red and SWIR.
pub fn fdi_factor() -> f32 {
    (NIR_WAVELENGTH - RED_WAVELENGTH) / (SWIR_WAVELENGTH - RED_WAVELENGTH)
}

/// NIR reflectance expected from a straight line between Red and SWIR.
pub fn nir_baseline(red: f32, swir: f32) -> f32 {
    red + (swir - red) * fdi_factor()
}

/// Floating Debris Index: observed NIR above the Red/SWIR baseline.
pub fn floating_debris_index(red: f32, nir: f32, swir: f32) -> f32 {
    nir - nir_baseline(red, swir)
}

/// Optical composite for one pixel: [0, v, v] with v = max(0, fdi·gain).
pub fn optical_pixel(red: f32, nir: f32, swir: f32) -> [f32; 3] {
    let v = (floating_debris_index(red, nir, swir) * FDI_GAIN).max(0.0);
    [0.0, v, v]
}

impl PixelAlgorithm {
    /// Number of input bands consumed per pixel.
    pub fn band_count(&self) -> usize {
        match self {
            PixelAlgorithm::RadarBackscatter => 2,
            PixelAlgorithm::FloatingDebris => 3,
        }
    }

    /// Provider band identifiers, in the order `evaluate` expects them.
    pub fn input_bands(&self) -> &'static [&'static str] {
        match self {
            PixelAlgorithm::RadarBackscatter => &["VV", "VH"],
            PixelAlgorithm::FloatingDebris => &["B04", "B08", "B11"],
        }
    }

    /// Evaluate one pixel. `samples` must hold `band_count()` values.
    pub fn evaluate(&self, samples: &[f32]) -> Result<[f32; 3]> {
        if samples.len() != self.band_count() {
            return Err(Error::InvalidArgument {
                arg: "samples",
                value: format!("{} values for {}", samples.len(), self),
            });
        }
        Ok(match self {
            PixelAlgorithm::RadarBackscatter => radar_pixel(samples[0], samples[1]),
            PixelAlgorithm::FloatingDebris => optical_pixel(samples[0], samples[1], samples[2]),
        })
    }

    /// Apply the algorithm to co-registered band rasters, producing a
    /// (rows, cols, 3) composite.
    pub fn apply(&self, bands: &[&Array2<f32>]) -> Result<Array3<f32>> {
        if bands.len() != self.band_count() {
            return Err(Error::InvalidArgument {
                arg: "bands",
                value: format!("{} rasters for {}", bands.len(), self),
            });
        }
        match self {
            PixelAlgorithm::RadarBackscatter => radar_composite(bands[0], bands[1]),
            PixelAlgorithm::FloatingDebris => optical_composite(bands[0], bands[1], bands[2]),
        }
    }
}

fn check_same_dim(first: &Array2<f32>, other: &Array2<f32>) -> Result<()> {
    if first.dim() != other.dim() {
        return Err(Error::InvalidArgument {
            arg: "bands",
            value: format!("shape {:?} vs {:?}", first.dim(), other.dim()),
        });
    }
    Ok(())
}

/// Element-wise radar composite over VV and VH rasters.
pub fn radar_composite(vv: &Array2<f32>, vh: &Array2<f32>) -> Result<Array3<f32>> {
    check_same_dim(vv, vh)?;
    let (rows, cols) = vv.dim();
    let mut out = Array3::<f32>::zeros((rows, cols, 3));
    Zip::indexed(vv).and(vh).for_each(|(i, j), &a, &b| {
        let px = radar_pixel(a, b);
        for (c, v) in px.iter().enumerate() {
            out[[i, j, c]] = *v;
        }
    });
    Ok(out)
}

/// Element-wise FDI composite over Red, NIR and SWIR rasters.
pub fn optical_composite(
    red: &Array2<f32>,
    nir: &Array2<f32>,
    swir: &Array2<f32>,
) -> Result<Array3<f32>> {
    check_same_dim(red, nir)?;
    check_same_dim(red, swir)?;
    let (rows, cols) = red.dim();
    let mut out = Array3::<f32>::zeros((rows, cols, 3));
    Zip::indexed(red)
        .and(nir)
        .and(swir)
        .for_each(|(i, j), &r, &n, &s| {
            let px = optical_pixel(r, n, s);
            for (c, v) in px.iter().enumerate() {
                out[[i, j, c]] = *v;
            }
        });
    Ok(out)
}

/// Quantize a composite to interleaved RGB8 the way the provider's AUTO
/// sample type does: clamp to [0, 1], scale by 255, round.
pub fn quantize_auto(composite: &Array3<f32>) -> Vec<u8> {
    composite
        .iter()
        .map(|&v| {
            if v.is_nan() {
                0
            } else {
                (v.clamp(0.0, 1.0) * 255.0).round() as u8
            }
        })
        .collect()
}
