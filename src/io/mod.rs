//! I/O layer: credential resolution (`auth`), the provider seam
//! (`provider`) and its Sentinel Hub transport (`sentinel_hub`), image
//! retrieval (`fetch`), and `writers` for persisting the result.
pub mod auth;
pub use auth::{AuthStrategy, Credential, resolve_credential};

pub mod provider;
pub use provider::{ImageryProvider, ProviderResponse, TokenExchange};

pub mod sentinel_hub;
pub use sentinel_hub::SentinelHubClient;

pub mod fetch;
pub use fetch::fetch_image;

pub mod writers;
