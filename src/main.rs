use std::path::PathBuf;

use clap::Parser;
use showgrid::headless::{self, OutputFormat};
use showgrid_core::{config::Config, view::ViewState, SortDirection, SortKey};
use showgrid_fetch::ReviewSource;

#[derive(Parser)]
#[command(name = "showgrid", about = "Searchable, sortable table of show reviews")]
struct Cli {
    /// Reviews endpoint URL. Overrides REVIEWS_ENDPOINT and the config file.
    #[arg(long)]
    endpoint: Option<String>,

    /// Read the payload from a JSON file instead of the endpoint.
    #[arg(long, conflicts_with = "endpoint")]
    file: Option<PathBuf>,

    /// Config file to use instead of ~/.config/showgrid/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/showgrid-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Print the derived view to stdout instead of starting the TUI.
    #[arg(long)]
    headless: bool,

    /// Initial title filter.
    #[arg(long, default_value = "")]
    query: String,

    /// Initial sort column: timestamp, show_name, review or show_type.
    #[arg(long)]
    sort: Option<SortKey>,

    /// Initial sort direction. Defaults to the column's own default.
    #[arg(long, requires = "sort")]
    direction: Option<SortDirection>,

    /// Headless output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/showgrid-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("showgrid debug log started, tail -f /tmp/showgrid-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().or_else(|e| {
            tracing::warn!(error = %e, "config load failed, using defaults");
            Config::from_env()
        })?,
    }
    .with_endpoint(cli.endpoint.clone());

    // Resolve the source before anything else so a missing endpoint fails
    // at startup rather than inside the UI.
    let source = match &cli.file {
        Some(path) => ReviewSource::File(path.clone()),
        None => ReviewSource::from_config(&config)?,
    };
    tracing::info!(source = %source.describe(), "review source resolved");

    let mut view = ViewState { query: cli.query.clone(), ..ViewState::default() };
    if let Some(key) = cli.sort {
        view.sort_key = key;
        view.direction = cli.direction.unwrap_or_else(|| key.default_direction());
    }

    let runtime = tokio::runtime::Runtime::new()?;

    if cli.headless {
        let out = runtime.block_on(headless::run(
            &source,
            &view,
            cli.format,
            &config.ui.date_format,
        ))?;
        print!("{out}");
        return Ok(());
    }

    showgrid_tui::run(config, source, view, runtime.handle().clone())
}
