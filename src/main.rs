//! shots-studio application entry point
//!
//! Runs the HTTP server by default, or performs a one-shot scan from the
//! command line.
//!
//! # Usage
//!
//! ```bash
//! # Serve the API on the configured address (default 127.0.0.1:5000)
//! shots-studio
//! shots-studio serve --port 8080
//!
//! # Scan a directory and print the images found
//! shots-studio scan ~/Pictures/Screenshots
//!
//! # Scan, tag and print the resulting collections
//! shots-studio scan ~/Pictures/Screenshots --process
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/shots-studio/config.toml` on Linux), created with defaults on
//! first run. Log verbosity follows `RUST_LOG`.

use shots_studio::{
    StudioError,
    cli::{Cli, Commands},
    config::StudioConfig,
    library::Library,
    output,
    process::RandomTags,
    server,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, StudioError>;

fn init_tracing(quiet: bool) {
    let default_filter = if quiet {
        "warn"
    } else {
        "shots_studio=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Scan once, optionally process, and print the outcome
fn handle_scan_command(
    config: &StudioConfig,
    path: Option<PathBuf>,
    process: bool,
    quiet: bool,
) -> Result<()> {
    let root = path.or_else(|| config.default_scan_dir.clone());
    let mut library = Library::new();
    let count = library.scan(&config.scanner(), root.as_deref())?;

    if process {
        let report = library.process(
            &mut RandomTags::from_entropy(),
            config.process.reset_collections,
        );
        if !quiet {
            println!("{}", output::scan_summary(count));
            println!("{}", output::process_summary(&report));
        }
        for image in library.images().iter() {
            println!("{}", output::image_line(image, quiet));
        }
        if !quiet {
            println!("\nCollections:");
        }
        for summary in library.collection_summaries() {
            println!("{}", output::collection_line(&summary, quiet));
        }
    } else {
        if !quiet {
            println!("{}", output::scan_summary(count));
        }
        for image in library.images().iter() {
            println!("{}", output::image_line(image, quiet));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let mut config = match &cli.config {
        Some(path) => StudioConfig::load_from(path)?,
        None => StudioConfig::load()?,
    };

    let quiet = cli.quiet || config.quiet;
    init_tracing(quiet);

    match cli.get_command() {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            server::serve(config).await?;
        }
        Commands::Scan { path, process } => {
            handle_scan_command(&config, path, process, quiet)?;
        }
    }

    Ok(())
}
