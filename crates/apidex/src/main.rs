mod commands;
mod filters;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::IndexOptions;

#[derive(Parser)]
#[command(name = "apidex")]
#[command(author, version, about = "Compressed public API indexes for source trees")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Extra directory to search for runtime grammar libraries (repeatable)
    #[arg(long = "grammar-dir", value_name = "DIR", global = true)]
    grammar_dirs: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the public API of files or directories
    Index {
        /// Files or directories to index
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Print a JSON array instead of the text index
        #[arg(long)]
        json: bool,

        /// Include test files and test directories
        #[arg(long)]
        include_tests: bool,
    },

    /// List supported languages and where their grammars come from
    Languages,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::parser_config(&cli.grammar_dirs);

    match cli.command {
        Commands::Index {
            paths,
            json,
            include_tests,
        } => commands::index(
            &paths,
            &IndexOptions {
                json,
                include_tests,
            },
            config,
        ),
        Commands::Languages => commands::languages(&config),
    }
}
