//! Command line interface.
//!
//! Subcommands:
//! - `serve`: load the data files and serve the HTTP API
//! - `audit`: load the data files and print the ontology audit as JSON

mod audit;
mod serve;

use clap::{Parser, Subcommand};
use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;

/// Read-only explorer over a research knowledge graph
#[derive(Parser)]
#[command(name = "explorer")]
#[command(about = "Read-only HTTP API over a research knowledge graph")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the HTTP API
    Serve {
        /// Host address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Compare the declared ontology with the loaded data
    Audit,
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Serve { ref host, port } => self.run_serve(host.as_deref(), port).await,
            Command::Audit => self.run_audit().await,
        }
    }

    /// Loads the configured data files into a fresh context.
    async fn load_context(&self, config: Config) -> Result<Context> {
        tracing::info!(
            data_dir = %config.store.data_dir.display(),
            files = config.store.files.len(),
            "Loading graph"
        );

        let (ctx, report) = Context::from_config(config).await?;

        if !report.skipped.is_empty() {
            tracing::warn!(
                skipped = report.skipped.len(),
                "Some data files were skipped"
            );
        }
        tracing::info!(
            loaded = report.loaded.len(),
            triples = report.triples,
            "Graph ready"
        );

        Ok(ctx)
    }
}
