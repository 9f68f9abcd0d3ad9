//! Run configuration sourced from the environment.
//!
//! Values are read once per run through a lookup function so callers (and
//! tests) can substitute their own source. Empty values count as unset.
use serde::{Deserialize, Serialize};

pub const ENV_ACCESS_TOKEN: &str = "SENTINEL_HUB_TOKEN";
pub const ENV_CLIENT_ID: &str = "SENTINEL_HUB_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SENTINEL_HUB_CLIENT_SECRET";
pub const ENV_BASE_URL: &str = "SENTINEL_HUB_URL";
pub const ENV_MODE: &str = "DETECTION_MODE";

pub const DEFAULT_BASE_URL: &str = "https://services.sentinel-hub.com";

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    pub client_id: Option<String>,
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,
    /// Raw mode flag; resolved leniently by `core::params::select_mode`
    pub mode: Option<String>,
    pub base_url: Option<String>,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            access_token: get(ENV_ACCESS_TOKEN),
            client_id: get(ENV_CLIENT_ID),
            client_secret: get(ENV_CLIENT_SECRET),
            mode: get(ENV_MODE),
            base_url: get(ENV_BASE_URL),
        }
    }

    /// Invocation arguments take precedence over environment values.
    pub fn with_overrides(mut self, access_token: Option<String>, mode: Option<String>) -> Self {
        if let Some(token) = access_token.filter(|t| !t.trim().is_empty()) {
            self.access_token = Some(token);
        }
        if let Some(mode) = mode {
            self.mode = Some(mode);
        }
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("RunConfig")
            .field("access_token", &redact(&self.access_token))
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("mode", &self.mode)
            .field("base_url", &self.base_url)
            .finish()
    }
}
