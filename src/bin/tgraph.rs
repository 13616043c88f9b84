//! CLI entry point for the `tgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use ticker_graph::builtin;
use ticker_graph::cli::commands;
use ticker_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "tgraph",
    about = "ticker-graph CLI — query the curated company knowledge graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every company in the built-in registry
    List,
    /// Metadata headline and graph stats for one company
    Info {
        /// Ticker symbol, e.g. AMZN
        ticker: String,
    },
    /// Graph stats for one company
    Stats {
        /// Ticker symbol
        ticker: String,
    },
    /// Nodes matching an exact type tag
    Nodes {
        /// Ticker symbol
        ticker: String,
        /// Type tag, e.g. main_category, segment, swot_strength
        #[arg(long = "type", value_name = "TAG")]
        tag: String,
    },
    /// Main category sections
    Sections {
        /// Ticker symbol
        ticker: String,
    },
    /// Business segments and the revenue split
    Segments {
        /// Ticker symbol
        ticker: String,
    },
    /// Competitor nodes
    Competitors {
        /// Ticker symbol
        ticker: String,
    },
    /// SWOT factor nodes
    Swot {
        /// Ticker symbol
        ticker: String,
    },
    /// Validate a dataset document file
    Check {
        /// Path to the dataset JSON document
        file: PathBuf,
        /// Also enforce referential integrity and edge id uniqueness
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let registry = match builtin::load_registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error loading built-in datasets: {}", e);
            process::exit(2);
        }
    };

    let result = match cli.command {
        Commands::List => commands::cmd_list(&registry, json),
        Commands::Info { ticker } => commands::cmd_info(&registry, &ticker, json),
        Commands::Stats { ticker } => commands::cmd_stats(&registry, &ticker, json),
        Commands::Nodes { ticker, tag } => commands::cmd_nodes(&registry, &ticker, &tag, json),
        Commands::Sections { ticker } => commands::cmd_sections(&registry, &ticker, json),
        Commands::Segments { ticker } => commands::cmd_segments(&registry, &ticker, json),
        Commands::Competitors { ticker } => commands::cmd_competitors(&registry, &ticker, json),
        Commands::Swot { ticker } => commands::cmd_swot(&registry, &ticker, json),
        Commands::Check { file, strict } => commands::cmd_check(&file, strict, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Malformed(_) => 2,
            GraphError::UnknownTicker(_) => 3,
            GraphError::EmptyNodeId(_)
            | GraphError::EmptyLabel(_)
            | GraphError::DuplicateNodeId(_)
            | GraphError::EmptyEndpoint(_, _)
            | GraphError::DanglingEdge { .. }
            | GraphError::DuplicateEdgeId(_) => 4,
            // Registry construction errors cannot occur once the built-in
            // registry has loaded, but they are validation failures too.
            GraphError::DuplicateTicker(_) | GraphError::EmptyTicker(_) => 4,
        };
        process::exit(code);
    }
}
