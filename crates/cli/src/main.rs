mod commands;
mod config;
mod logging;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use marquee_catalog::Catalog;
use marquee_core::MovieId;
use marquee_storage::JsonFileStore;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Marquee movie catalog.
#[derive(Parser)]
#[command(name = "marquee", version, about = "Marquee movie catalog")]
struct Cli {
    /// Configuration file (default: ./marquee.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Movie store file; overrides `store.path` from the configuration
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in the catalog
    List,

    /// Show the most recently released movies
    Latest {
        /// How many movies to show (default: `catalog.latest_count`)
        #[arg(long)]
        count: Option<usize>,
    },

    /// Search movies by title, director, genre or year
    Search {
        /// Category: title, director, genre or year (anything else matches all)
        category: String,
        /// Value to match
        value: String,
    },

    /// Show one movie
    Get {
        /// Movie id
        id: u64,
    },

    /// Add a movie from a JSON file
    Add {
        /// Path to the movie JSON
        file: PathBuf,
    },

    /// Apply a partial update from a JSON file
    Update {
        /// Movie id
        id: u64,
        /// Path to the JSON with the fields to change
        file: PathBuf,
    },

    /// Delete a movie
    Delete {
        /// Movie id
        id: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(msg) => {
            report_error(&msg, cli.output, cli.quiet);
            process::exit(1);
        }
    };
    logging::init(cli.verbose, &config.log.level);

    let store_path = cli.store.unwrap_or(config.store.path);
    let store = match JsonFileStore::open(&store_path) {
        Ok(s) => s,
        Err(e) => {
            report_error(&format!("error opening store: {}", e), cli.output, cli.quiet);
            process::exit(1);
        }
    };
    let catalog = Catalog::new(store).with_latest_count(config.catalog.latest_count);

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            report_error(&format!("failed to start runtime: {}", e), cli.output, cli.quiet);
            process::exit(1);
        }
    };

    let output = cli.output;
    let quiet = cli.quiet;
    let command = cli.command;
    rt.block_on(async move {
        match command {
            Commands::List => commands::cmd_list(&catalog, output, quiet).await,
            Commands::Latest { count } => {
                commands::cmd_latest(&catalog, count, output, quiet).await
            }
            Commands::Search { category, value } => {
                commands::cmd_search(&catalog, &category, &value, output, quiet).await
            }
            Commands::Get { id } => commands::cmd_get(&catalog, MovieId(id), output, quiet).await,
            Commands::Add { file } => commands::cmd_add(&catalog, &file, output, quiet).await,
            Commands::Update { id, file } => {
                commands::cmd_update(&catalog, MovieId(id), &file, output, quiet).await
            }
            Commands::Delete { id } => {
                commands::cmd_delete(&catalog, MovieId(id), output, quiet).await
            }
        }
        if let Err(e) = catalog.close().await {
            report_error(&format!("error closing store: {}", e), output, quiet);
            process::exit(1);
        }
    });
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}
