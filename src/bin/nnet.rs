//! CLI entry point for the `nnet` command-line tool.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use node_network::cli::commands;
use node_network::NetworkError;

#[derive(Parser)]
#[command(
    name = "nnet",
    about = "Build node networks from notation and query islands, levels and paths"
)]
struct Cli {
    /// Topology notation, e.g. "A-B-C-D-A"
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    expr: Option<String>,

    /// Read topology notation from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

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
    /// Print every node with its neighbours
    Dump,
    /// Show node, edge and island counts
    Stats,
    /// List the island containing a node
    Island {
        /// Node name
        node: String,
    },
    /// List nodes grouped by distance from a node
    Levels {
        /// Node name
        node: String,
    },
    /// Find the shortest path between two nodes
    Path {
        /// Start node name
        from: String,
        /// End node name
        to: String,
    },
    /// List every island
    Islands,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = commands::load_topology(cli.expr.as_deref(), cli.file.as_deref()).and_then(
        |topology| match &cli.command {
            Commands::Dump => commands::cmd_dump(&topology, json, &mut out),
            Commands::Stats => commands::cmd_stats(&topology, json, &mut out),
            Commands::Island { node } => commands::cmd_island(&topology, node, json, &mut out),
            Commands::Levels { node } => commands::cmd_levels(&topology, node, json, &mut out),
            Commands::Path { from, to } => {
                commands::cmd_path(&topology, from, to, json, &mut out)
            }
            Commands::Islands => commands::cmd_islands(&topology, json, &mut out),
        },
    );
    let _ = out.flush();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            NetworkError::Io(_) => 1,
            NetworkError::Parse { .. } => 2,
            NetworkError::NodeNotFound(_) | NetworkError::UnknownSymbol(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
