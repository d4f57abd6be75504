use atlas::core::config::{self, AtlasConfig, CliOverrides};
use atlas::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "atlas", about = "Browse and search the countries of the world")]
struct Args {
    /// Base URL of the REST Countries v2 API
    #[arg(long)]
    base_url: Option<String>,

    /// Route to open on start: "/", "/countries" or "/countries/<CODE>"
    #[arg(short, long)]
    route: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        AtlasConfig::default()
    });

    let cli = CliOverrides {
        base_url: args.base_url.as_deref(),
        timeout_secs: args.timeout,
        start_route: args.route.as_deref(),
    };
    let resolved = config::resolve(&file_config, &cli)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!(
        "Atlas starting up: base_url={}, start_route={}",
        resolved.base_url, resolved.start_route
    );

    tui::run(resolved)
}
