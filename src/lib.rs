//! Polyset: loader and adjacency validator for directory-based polygon sets.
//!
//! A polygon set is a directory of per-polygon vertex files plus one
//! `adjacency.txt`. Polyset parses the files, deduplicates shared vertices
//! by id, cross-checks every declared adjacency against the actual boundary
//! geometry, and returns one immutable, fully validated model.
//!
//! # Modules
//!
//! - [`model`]: The validated in-memory model (VertexTable, PolygonRecord,
//!   AdjacencyIndex, PolygonSet)
//! - [`loader`]: Directory scanning, file parsing, and set assembly
//! - [`report`]: Structured load summaries
//! - [`error`]: Error types for polyset operations

pub mod error;
pub mod loader;
pub mod model;
pub mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::{LoadStage, PolysetError};

/// The polyset CLI application.
#[derive(Parser)]
#[command(name = "polyset")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Load and validate a polygon-set directory.
    Load(LoadArgs),
}

/// Arguments for the load subcommand.
#[derive(clap::Args)]
struct LoadArgs {
    /// Directory containing per-polygon files and adjacency.txt.
    dir: PathBuf,

    /// Integer factor applied to every coordinate while reading.
    #[arg(long, default_value_t = 1)]
    scale: i64,

    /// Output format for the summary ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Write the full validated model as JSON to this file.
    #[arg(long)]
    dump_model: Option<PathBuf>,
}

/// Run the polyset CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PolysetError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Load(args)) => run_load(args),
        None => {
            println!("polyset {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Loader and adjacency validator for polygon sets.");
            println!();
            println!("Run 'polyset --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the load subcommand.
fn run_load(args: LoadArgs) -> Result<(), PolysetError> {
    let options = loader::LoadOptions { scale: args.scale };
    let set = loader::load(&args.dir, &options)?;
    let report = report::summarize(&set)?;

    match args.output.as_str() {
        "json" => {
            let json =
                serde_json::to_string_pretty(&report).map_err(|source| {
                    PolysetError::ModelJsonWrite {
                        path: PathBuf::from("<stdout>"),
                        source,
                    }
                })?;
            println!("{}", json);
        }
        _ => {
            print!("{}", report);
        }
    }

    if let Some(dump_path) = &args.dump_model {
        set.write_json(dump_path)?;
        println!("Model written to {}", dump_path.display());
    }

    Ok(())
}
