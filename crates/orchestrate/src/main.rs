//! Orchestrate - command-line client for the Orchestrate document store
//!
//! Main entry point for the `orchestrate` CLI.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use console::Style;
use orchestrate_client::OrchestrateClient;

mod commands;

use commands::{event, graph, kv, search};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Orchestrate - key-value, search, graph and event operations from the shell
#[derive(Parser)]
#[command(name = "orchestrate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output status, ref and body as one JSON document (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// API key
    #[arg(long, global = true, env = "ORCHESTRATE_API_KEY", hide_env_values = true)]
    pub token: Option<String>,

    /// API host (default: https://api.orchestrate.io/)
    #[arg(long, global = true, env = "ORCHESTRATE_API_URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch an item
    Get(kv::GetArgs),

    /// List items in a collection
    List(kv::ListArgs),

    /// Store an item
    Put(kv::PutArgs),

    /// Delete an item
    Remove(kv::RemoveArgs),

    /// Search a collection
    Search(search::SearchArgs),

    /// Delete an entire collection
    DeleteCollection(kv::DeleteCollectionArgs),

    /// Create or delete a relation between two items
    Relate(graph::RelateArgs),

    /// Walk relations from an item
    Relations(graph::RelationsArgs),

    /// Record or read events
    Event(event::EventArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "orchestrate=debug,orchestrate_client=debug,warn"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    if let Err(e) = run(cli).await {
        let red = Style::new().red();
        eprintln!("{} {:#}", red.apply_to("Error:"), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut builder = OrchestrateClient::builder().token(cli.token.unwrap_or_default());
    if let Some(url) = cli.url {
        builder = builder.base_url(url);
    }
    let client = builder
        .build()
        .context("set --token or ORCHESTRATE_API_KEY")?;

    // Create context for commands
    let ctx = commands::Context {
        client,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    // Dispatch to command handlers
    match cli.command {
        Commands::Get(args) => kv::get(args, &ctx).await,
        Commands::List(args) => kv::list(args, &ctx).await,
        Commands::Put(args) => kv::put(args, &ctx).await,
        Commands::Remove(args) => kv::remove(args, &ctx).await,
        Commands::Search(args) => search::run(args, &ctx).await,
        Commands::DeleteCollection(args) => kv::delete_collection(args, &ctx).await,
        Commands::Relate(args) => graph::relate(args, &ctx).await,
        Commands::Relations(args) => graph::relations(args, &ctx).await,
        Commands::Event(args) => event::run(args, &ctx).await,
    }
}
