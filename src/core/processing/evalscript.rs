//! Provider-side evaluation scripts for the pixel algorithms.
//!
//! The provider runs these per output pixel; the numeric constants are
//! formatted from the same values the native transforms in `ops` use.
use crate::core::processing::ops::{
    DB_SCALE, FDI_GAIN, NIR_WAVELENGTH, RATIO_EPSILON, RED_WAVELENGTH, SWIR_WAVELENGTH,
};
use crate::types::PixelAlgorithm;

fn setup_block(bands: &[&str]) -> String {
    let quoted: Vec<String> = bands.iter().map(|b| format!("\"{}\"", b)).collect();
    format!(
        "function setup() {{\n  return {{\n    input: [{}],\n    output: {{ bands: 3 }}\n  }};\n}}\n",
        quoted.join(", ")
    )
}

fn radar_script() -> String {
    format!(
        "//VERSION=3\n{setup}\nfunction toDb(linear) {{\n  return Math.max(0, Math.log(linear) * {k} + 1);\n}}\n\nfunction evaluatePixel(sample) {{\n  var vv = toDb(sample.VV);\n  var vh = toDb(sample.VH);\n  return [vv, vh, vv / (vh + {eps})];\n}}\n",
        setup = setup_block(PixelAlgorithm::RadarBackscatter.input_bands()),
        k = DB_SCALE,
        eps = RATIO_EPSILON,
    )
}

fn debris_script() -> String {
    format!(
        "//VERSION=3\n{setup}\nfunction evaluatePixel(sample) {{\n  var factor = ({nir} - {red}) / ({swir} - {red});\n  var baseline = sample.B04 + (sample.B11 - sample.B04) * factor;\n  var fdi = sample.B08 - baseline;\n  var v = Math.max(0, fdi * {gain:.1});\n  return [0, v, v];\n}}\n",
        setup = setup_block(PixelAlgorithm::FloatingDebris.input_bands()),
        nir = NIR_WAVELENGTH,
        red = RED_WAVELENGTH,
        swir = SWIR_WAVELENGTH,
        gain = FDI_GAIN,
    )
}

impl PixelAlgorithm {
    /// Version 3 evaluation script computing this algorithm on the provider.
    pub fn evalscript(&self) -> String {
        match self {
            PixelAlgorithm::RadarBackscatter => radar_script(),
            PixelAlgorithm::FloatingDebris => debris_script(),
        }
    }
}
