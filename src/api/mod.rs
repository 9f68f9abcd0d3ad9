//! High-level, ergonomic library API: run one acquisition end to end, from
//! credential resolution to a file on disk. Prefer these entrypoints over the
//! lower-level `core` and `io` modules when embedding seawatch.
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::core::config::RunConfig;
use crate::core::params::AcquisitionParams;
use crate::core::request::{ImageRequest, TemporalWindow, build_request};
use crate::error::{Error, Result};
use crate::io::auth::{AuthStrategy, Credential, resolve_credential};
use crate::io::fetch::fetch_image;
use crate::io::provider::{ImageryProvider, TokenExchange};
use crate::io::sentinel_hub::SentinelHubClient;
use crate::io::writers::image::write_image;
use crate::types::{AcquisitionMode, PixelAlgorithm};

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "satellite_image.png";

/// Pipeline progress. Stages only move forward; `Errored` absorbs.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Stage {
    Unauthenticated,
    Authenticated,
    Requested,
    Fetched,
    Persisted,
    Done,
    Errored,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Unauthenticated => Some(Stage::Authenticated),
            Stage::Authenticated => Some(Stage::Requested),
            Stage::Requested => Some(Stage::Fetched),
            Stage::Fetched => Some(Stage::Persisted),
            Stage::Persisted => Some(Stage::Done),
            Stage::Done | Stage::Errored => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Errored)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Unauthenticated => "Unauthenticated",
            Stage::Authenticated => "Authenticated",
            Stage::Requested => "Requested",
            Stage::Fetched => "Fetched",
            Stage::Persisted => "Persisted",
            Stage::Done => "Done",
            Stage::Errored => "Errored",
        };
        write!(f, "{}", s)
    }
}

struct Tracker {
    stage: Stage,
}

impl Tracker {
    fn new() -> Self {
        Self {
            stage: Stage::Unauthenticated,
        }
    }

    fn advance(&mut self) {
        if let Some(next) = self.stage.next() {
            debug!("{} -> {}", self.stage, next);
            self.stage = next;
        }
    }

    /// Record a failure at the current stage and pass the error through.
    fn fail(&mut self, e: Error) -> Error {
        debug!("Failed at stage {}: {}", self.stage, e);
        self.stage = Stage::Errored;
        e
    }
}

/// Outcome of a completed acquisition
#[derive(Debug, Clone)]
pub struct AcquisitionReport {
    pub mode: AcquisitionMode,
    pub algorithm: PixelAlgorithm,
    pub time_range: TemporalWindow,
    pub output: PathBuf,
    pub bytes_written: u64,
    pub stage: Stage,
}

/// Run one acquisition with an explicit provider and clock.
///
/// Credentials are resolved before anything else, so a configuration with
/// neither a token nor a client pair fails without touching `provider`.
pub fn acquire_with<P>(
    provider: &P,
    config: &RunConfig,
    output: &Path,
    now: DateTime<Utc>,
) -> Result<AcquisitionReport>
where
    P: TokenExchange + ImageryProvider + ?Sized,
{
    let strategy = AuthStrategy::from_config(config)?;
    run_pipeline(provider, &strategy, config, output, now)
}

/// Run one acquisition against Sentinel Hub at the configured base URL,
/// using the current wall-clock time.
pub fn acquire_to_path(config: &RunConfig, output: &Path) -> Result<AcquisitionReport> {
    // No network client is built without usable credentials
    let strategy = AuthStrategy::from_config(config)?;
    let client = SentinelHubClient::from_config(config)?;
    run_pipeline(&client, &strategy, config, output, Utc::now())
}

fn run_pipeline<P>(
    provider: &P,
    strategy: &AuthStrategy,
    config: &RunConfig,
    output: &Path,
    now: DateTime<Utc>,
) -> Result<AcquisitionReport>
where
    P: TokenExchange + ImageryProvider + ?Sized,
{
    let mut tracker = Tracker::new();

    info!("Authenticating with {}", strategy.name());
    let credential: Credential =
        resolve_credential(strategy, provider).map_err(|e| tracker.fail(e))?;
    tracker.advance();

    let params = AcquisitionParams::select(config.mode.as_deref());
    let request: ImageRequest = build_request(&params, now);
    info!(
        "Mode {} ({}), window {} .. {}",
        params.mode, params.algorithm, request.time_range.from, request.time_range.to
    );
    tracker.advance();

    let bytes = fetch_image(provider, &credential, &request).map_err(|e| tracker.fail(e))?;
    tracker.advance();

    let bytes_written = write_image(output, &bytes).map_err(|e| tracker.fail(e))?;
    tracker.advance();
    info!("Saved {} bytes to {:?}", bytes_written, output);
    tracker.advance();

    Ok(AcquisitionReport {
        mode: params.mode,
        algorithm: params.algorithm,
        time_range: request.time_range,
        output: output.to_path_buf(),
        bytes_written,
        stage: tracker.stage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_linearly_to_done() {
        let mut stage = Stage::Unauthenticated;
        let mut seen = vec![stage];
        while let Some(next) = stage.next() {
            assert!(next > stage);
            stage = next;
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                Stage::Unauthenticated,
                Stage::Authenticated,
                Stage::Requested,
                Stage::Fetched,
                Stage::Persisted,
                Stage::Done
            ]
        );
        assert!(stage.is_terminal());
    }

    #[test]
    fn errored_absorbs() {
        assert_eq!(Stage::Errored.next(), None);
        assert!(Stage::Errored.is_terminal());

        let mut tracker = Tracker::new();
        tracker.advance();
        let _ = tracker.fail(Error::EmptyResponse);
        assert_eq!(tracker.stage, Stage::Errored);
        tracker.advance();
        assert_eq!(tracker.stage, Stage::Errored);
    }

    #[test]
    fn missing_credentials_fail_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let config = RunConfig {
            base_url: Some("http://127.0.0.1:9".into()),
            ..Default::default()
        };
        let err = acquire_to_path(&config, &output).unwrap_err();
        assert!(matches!(err, Error::AuthenticationRequired));
        assert!(!output.exists());
    }
}
