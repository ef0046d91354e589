//! exifscope CLI - forensic EXIF metadata inspector.
//!
//! exifscope takes one image and reports its normalized EXIF tags, GPS
//! coordinates with a reverse-geocoded address, timestamp consistency,
//! a content integrity digest, and an LSB steganography check.
//!
//! # Usage
//!
//! ```bash
//! # Inspect a single image
//! exifscope inspect photo.jpg
//!
//! # Inspect and write the metadata export document
//! exifscope inspect photo.jpg --output metadata.json
//!
//! # View configuration
//! exifscope config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// exifscope - forensic EXIF metadata inspector.
#[derive(Parser, Debug)]
#[command(name = "exifscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect an image and report its metadata
    Inspect(cli::inspect::InspectArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match exifscope_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `exifscope config path`."
            );
            exifscope_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("exifscope v{}", exifscope_core::VERSION);

    match cli.command {
        Commands::Inspect(args) => cli::inspect::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
