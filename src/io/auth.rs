//! Bearer credential resolution.
//!
//! Strategy order: explicit access token, then a client id/secret exchange,
//! otherwise `AuthenticationRequired`. The strategy is chosen from
//! configuration alone, so a run without credentials fails before any
//! network activity.
use tracing::{debug, info};

use crate::core::config::RunConfig;
use crate::error::{Error, Result};
use crate::io::provider::TokenExchange;

/// Opaque bearer token. Set once per run, never refreshed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(<{} chars>)", self.0.len())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum AuthStrategy {
    AccessToken(String),
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
}

impl AuthStrategy {
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        if let Some(token) = &config.access_token {
            return Ok(AuthStrategy::AccessToken(token.clone()));
        }
        match (&config.client_id, &config.client_secret) {
            (Some(client_id), Some(client_secret)) => Ok(AuthStrategy::ClientCredentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            }),
            _ => Err(Error::AuthenticationRequired),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AuthStrategy::AccessToken(_) => "access-token",
            AuthStrategy::ClientCredentials { .. } => "client-credentials",
        }
    }
}

impl std::fmt::Debug for AuthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthStrategy::AccessToken(_) => write!(f, "AccessToken(<redacted>)"),
            AuthStrategy::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .finish_non_exhaustive(),
        }
    }
}

/// Turn a strategy into the run's credential. Only the client-credentials
/// strategy touches the network, with exactly one exchange.
pub fn resolve_credential<T>(strategy: &AuthStrategy, exchange: &T) -> Result<Credential>
where
    T: TokenExchange + ?Sized,
{
    match strategy {
        AuthStrategy::AccessToken(token) => {
            debug!("Using explicit access token");
            Ok(Credential::new(token.clone()))
        }
        AuthStrategy::ClientCredentials {
            client_id,
            client_secret,
        } => {
            info!("Exchanging client credentials for an access token");
            exchange.exchange_token(client_id, client_secret)
        }
    }
}
