//! Core building blocks: run configuration, acquisition parameter selection,
//! request assembly and the pixel algorithms. These are consumed by the
//! high-level `api` module.
pub mod config;
pub mod params;
pub mod processing;
pub mod request;
