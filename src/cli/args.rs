use clap::Parser;
use std::path::PathBuf;

use seawatch::DEFAULT_OUTPUT;

#[derive(Parser, Debug)]
#[command(
    name = "seawatch",
    version,
    about = "Fetch the latest oil-slick (radar) or floating-debris (optical) image of the watch region",
    after_help = "Environment:\n  SENTINEL_HUB_TOKEN          access token (takes precedence)\n  SENTINEL_HUB_CLIENT_ID      OAuth client id\n  SENTINEL_HUB_CLIENT_SECRET  OAuth client secret\n  DETECTION_MODE              oil (default) or plastic\n  SENTINEL_HUB_URL            provider base URL"
)]
pub struct CliArgs {
    /// Output PNG path
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Access token; overrides SENTINEL_HUB_TOKEN
    #[arg(long)]
    pub token: Option<String>,

    /// Detection mode (oil or plastic); overrides DETECTION_MODE.
    /// Unrecognized values fall back to oil.
    #[arg(long)]
    pub mode: Option<String>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
