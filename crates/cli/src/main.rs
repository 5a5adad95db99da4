//! Contextwise CLI — the main entry point.
//!
//! Commands:
//! - `serve`      — Start the dashboard HTTP server
//! - `show`       — Detect contexts and print the dashboard as text
//! - `knowledge`  — Print the knowledge base table
//! - `graph`      — Export the knowledge graph (DOT, SVG, JSON)
//! - `init`       — Write a default config file
//! - `doctor`     — Diagnose config and live lookups

use clap::{Parser, Subcommand};
use contextwise_core::Role;

mod commands;

use commands::graph::GraphFormat;

#[derive(Parser)]
#[command(
    name = "contextwise",
    about = "Contextwise — context-aware smart workspace assistant + tourist guide",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard HTTP server
    Serve {
        /// Override the port
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
        port: Option<u16>,
    },

    /// Detect contexts and print the dashboard
    Show {
        /// Role to resolve services for (Student, Professor, Developer, Guest)
        #[arg(short, long)]
        role: Option<Role>,

        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the ontology knowledge base
    Knowledge {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the Role → Context → Service graph
    Graph {
        #[arg(short, long, value_enum, default_value_t = GraphFormat::Dot)]
        format: GraphFormat,
    },

    /// Write a default config file
    Init,

    /// Diagnose config and live lookups
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Show { role, json } => commands::show::run(role, json).await?,
        Commands::Knowledge { json } => commands::knowledge::run(json)?,
        Commands::Graph { format } => commands::graph::run(format)?,
        Commands::Init => commands::init::run()?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
