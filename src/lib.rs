#![doc = r#"
seawatch — acquire the most recent satellite scene over a fixed sea region and
render it for oil-slick or floating-debris detection.

One run resolves a bearer credential, picks radar (Sentinel-1 GRD) or optical
(Sentinel-2 L2A) acquisition parameters, builds a 512×512 PNG request over the
last 90 days, fetches the rendered raster from Sentinel Hub and writes it to
disk. The pixel algorithms run provider-side as evaluation scripts; the same
formulas are available natively for band rasters held in memory.

Quick start: acquire to a file
------------------------------
```rust,no_run
use std::path::Path;
use seawatch::{acquire_to_path, RunConfig};

fn main() -> seawatch::Result<()> {
    let config = RunConfig::from_env();
    let report = acquire_to_path(&config, Path::new("satellite_image.png"))?;
    println!("{} bytes ({})", report.bytes_written, report.algorithm);
    Ok(())
}
```

Bring your own provider and clock
---------------------------------
```rust,no_run
use std::path::Path;
use chrono::Utc;
use seawatch::{acquire_with, RunConfig, SentinelHubClient};

fn main() -> seawatch::Result<()> {
    let config = RunConfig {
        access_token: Some("token".to_string()),
        mode: Some("plastic".to_string()),
        ..Default::default()
    };
    let client = SentinelHubClient::new("https://services.sentinel-hub.com")?;
    acquire_with(&client, &config, Path::new("debris.png"), Utc::now())?;
    Ok(())
}
```

Apply a pixel algorithm locally
-------------------------------
```rust
use ndarray::array;
use seawatch::PixelAlgorithm;

let vv = array![[0.5_f32, 0.02]];
let vh = array![[0.1_f32, 0.005]];
let composite = PixelAlgorithm::RadarBackscatter.apply(&[&vv, &vh]).unwrap();
assert_eq!(composite.dim(), (1, 2, 3));
```

Error handling
--------------
All public functions return `seawatch::Result<T>`; match on `seawatch::Error`
to tell missing credentials apart from provider or filesystem failures.

Useful modules
--------------
- [`api`] — end-to-end acquisition entry points.
- [`core`] — configuration, parameter selection, request building, pixel algorithms.
- [`io`] — authentication, provider transport, fetching and writing.
- [`types`] — shared enums.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::config::RunConfig;
pub use crate::core::params::{AcquisitionParams, ModalityConstraints, select_mode};
pub use crate::core::request::{ImageRequest, SpatialWindow, TemporalWindow, build_request};
pub use error::{Error, Result};
pub use types::{AcquisitionMode, DataCollection, MosaickingOrder, OutputFormat, PixelAlgorithm};

pub use io::{
    AuthStrategy, Credential, ImageryProvider, ProviderResponse, SentinelHubClient,
    TokenExchange, fetch_image, resolve_credential,
};
pub use io::writers::image::write_image;

pub use api::{AcquisitionReport, DEFAULT_OUTPUT, Stage, acquire_to_path, acquire_with};
