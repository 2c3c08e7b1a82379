//! volcanoyt CLI binary
//!
//! Native host for the version poller: a one-shot check, a long-running
//! watch that can keep a prerendered landing page current, and a static
//! render of the page itself.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use config::{CliOptions, config_path, load_config, resolve_settings};

/// Track the versions of the VolcanoYT products and prerender the landing page.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct RootCli {
    #[command(subcommand)]
    command: CliCommand,
    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Poll every service once and print what was found.
    Check(CheckArgs),
    /// Keep polling until Ctrl+C, logging every version change.
    Watch(WatchArgs),
    /// Write the static landing page.
    Render(RenderArgs),
}

#[derive(Args, Debug, Clone)]
struct GlobalArgs {
    /// Config file (TOML, or JSON by extension). Defaults to ./volcanoyt.toml if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Seconds between poll cycles.
    #[arg(long, global = true)]
    interval_secs: Option<u64>,
    /// Per-request timeout in milliseconds.
    #[arg(long, global = true)]
    request_timeout_ms: Option<u64>,
    /// Log level (trace|debug|info|warn|error). RUST_LOG wins when set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Args, Debug, Clone)]
struct CheckArgs {
    /// Print the results as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct WatchArgs {
    /// Re-render the landing page to this path on every change.
    #[arg(long)]
    render: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    /// Output HTML file.
    #[arg(long)]
    out: PathBuf,
    /// Skip polling and render without version badges.
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = RootCli::parse();

    init_logging(&cli.global.log_level)?;

    let config = load_config(&config_path(&cli.global))?;
    let settings = resolve_settings(&cli.global, config.as_ref())?;

    match &cli.command {
        CliCommand::Check(args) => commands::run_check(&settings, args.json).await,
        CliCommand::Watch(args) => commands::run_watch(&settings, args.render.as_deref()).await,
        CliCommand::Render(args) => {
            commands::run_render(&settings, &args.out, args.offline).await
        }
    }
}

fn init_logging(level: &str) -> Result<()> {
    let level = level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("invalid log level: {level}"))?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

impl CliOptions for GlobalArgs {
    fn config(&self) -> Option<PathBuf> {
        self.config.clone()
    }
    fn interval_secs(&self) -> Option<u64> {
        self.interval_secs
    }
    fn request_timeout_ms(&self) -> Option<u64> {
        self.request_timeout_ms
    }
}
