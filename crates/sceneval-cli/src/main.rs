//! Sceneval CLI - Command-line interface for scene validation

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{rules, validate};

#[derive(Parser)]
#[command(name = "sceneval")]
#[command(about = "Validate scene descriptions against technical and composition rules", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scene
    Validate {
        /// Scene file path, inline JSON string, or store identifier
        scene: String,

        /// Path to settings file (default: sceneval.toml if present)
        #[arg(long)]
        config: Option<String>,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(long, default_value = "json", value_parser = ["json", "text", "yaml"])]
        format: String,

        /// Archive the report to the configured store
        #[arg(long)]
        archive: bool,
    },

    /// Print the effective rule configuration as TOML
    Rules {
        /// Path to settings file (default: sceneval.toml if present)
        #[arg(long)]
        config: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate {
            scene,
            config,
            output,
            format,
            archive,
        } => validate::run(validate::ValidateArgs {
            scene,
            config,
            output,
            format,
            archive,
        }),
        Commands::Rules { config } => rules::run(config.as_deref()),
    }
}
