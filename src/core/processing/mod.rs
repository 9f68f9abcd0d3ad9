//! Pixel algorithms: native per-pixel transforms and band-raster composites
//! (`ops`), and the matching provider evaluation scripts (`evalscript`).
pub mod evalscript;
pub mod ops;
