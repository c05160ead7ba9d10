//! Tagguard CLI - evaluate the required-tag gate against JSON fixtures.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{check, normalize, resources};

#[derive(Parser)]
#[command(name = "tagguard")]
#[command(about = "Required-tag gate for calendar event saves")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the before-save check for an event
    Check(check::CheckArgs),
    /// Show the normalized form of a required-tag value
    Normalize {
        /// Comma-separated tags or a JSON array
        spec: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List resources and their tags
    Resources {
        /// Path to a JSON array of resources
        file: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => check::run(args),
        Commands::Normalize { spec, json } => normalize::run(spec, json),
        Commands::Resources { file, json } => resources::run(file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
