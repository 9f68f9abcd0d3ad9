//! Sentinel Hub transport over a blocking `reqwest` client.
//!
//! One POST per exchange, no retry. Transport timeouts are whatever the
//! HTTP client defaults to.
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::debug;

use crate::core::config::RunConfig;
use crate::core::request::ImageRequest;
use crate::error::{Error, Result};
use crate::io::auth::Credential;
use crate::io::provider::{ImageryProvider, ProviderResponse, TokenExchange};

pub const TOKEN_PATH: &str = "/auth/realms/main/protocol/openid-connect/token";
pub const PROCESS_PATH: &str = "/api/v1/process";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// How a successful image response body should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Binary,
    Streamed,
    Unsupported,
}

/// Classify a response from its content type and whether the length is
/// known up front.
pub fn classify_body(content_type: Option<&str>, content_length: Option<u64>) -> BodyKind {
    let essence = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .unwrap_or_default();
    let is_raster = essence.starts_with("image/") || essence == "application/octet-stream";
    match (is_raster, content_length) {
        (false, _) => BodyKind::Unsupported,
        (true, Some(_)) => BodyKind::Binary,
        (true, None) => BodyKind::Streamed,
    }
}

pub struct SentinelHubClient {
    client: Client,
    base_url: String,
}

impl SentinelHubClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("seawatch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &RunConfig) -> Result<Self> {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().unwrap_or_default();
    Err(Error::ProviderRequestFailed(format!(
        "HTTP {} from {}: {}",
        status,
        url,
        body.trim()
    )))
}

impl TokenExchange for SentinelHubClient {
    fn exchange_token(&self, client_id: &str, client_secret: &str) -> Result<Credential> {
        let url = self.url(TOKEN_PATH);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .send()?;
        let token: TokenResponse = ensure_success(response)?.json()?;
        if let Some(secs) = token.expires_in {
            debug!("Access token valid for {}s", secs);
        }
        Ok(Credential::new(token.access_token))
    }
}

impl ImageryProvider for SentinelHubClient {
    fn submit(&self, credential: &Credential, request: &ImageRequest) -> Result<ProviderResponse> {
        let url = self.url(PROCESS_PATH);
        debug!(
            "POST {} ({} over {} to {})",
            url, request.params.collection, request.time_range.from, request.time_range.to
        );
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, credential.bearer_header())
            .header(ACCEPT, request.format.mime_type())
            .json(&request.to_payload())
            .send()?;
        let response = ensure_success(response)?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let kind = classify_body(content_type.as_deref(), response.content_length());
        debug!("Response content type {:?} -> {:?}", content_type, kind);

        Ok(match kind {
            BodyKind::Binary => ProviderResponse::Binary(response.bytes()?),
            BodyKind::Streamed => ProviderResponse::Streamed(Box::new(response)),
            BodyKind::Unsupported => ProviderResponse::Unsupported {
                content_type: content_type.unwrap_or_else(|| "<none>".to_string()),
            },
        })
    }
}
