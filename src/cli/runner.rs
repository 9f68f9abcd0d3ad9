use tracing::info;
use tracing_subscriber::EnvFilter;

use seawatch::{RunConfig, acquire_to_path};

use super::args::CliArgs;
use super::errors::AppError;

const USAGE: &str = "\
Set credentials before running, either
  SENTINEL_HUB_TOKEN=<access token>            (or pass --token)
or both
  SENTINEL_HUB_CLIENT_ID=<client id>
  SENTINEL_HUB_CLIENT_SECRET=<client secret>
Optionally choose DETECTION_MODE=oil|plastic and an output path:
  seawatch [OUTPUT.png]";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("seawatch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seawatch=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_tracing(args.log);

    if args.output.is_dir() {
        return Err(AppError::OutputIsDirectory {
            path: args.output.display().to_string(),
        });
    }

    let config = RunConfig::from_env().with_overrides(args.token, args.mode);
    info!("Starting acquisition -> {:?}", args.output);

    let report = acquire_to_path(&config, &args.output)?;
    println!(
        "Saved {} image ({} bytes) to {}",
        report.mode,
        report.bytes_written,
        report.output.display()
    );
    Ok(())
}

/// Print the failure, plus usage guidance when credentials were missing.
pub fn report_failure(e: &AppError) {
    eprintln!("Error: {}", e);
    if e.needs_usage() {
        eprintln!("\n{}", USAGE);
    }
}
