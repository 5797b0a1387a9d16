//! CLI definitions for the comuna command-line interface.
//!
//! Four subcommands: `pages` lists the site catalog, `search` runs the
//! resolver against it, `weather` fetches (or watches) current conditions,
//! and `serve` exposes the HTTP API.

pub mod display;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "comuna",
    about = "Municipal portal services: catalog search and town weather",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the pages in the site catalog
    Pages {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the site catalog
    Search {
        /// Free-text query
        query: String,

        /// Truncate the result list further than the built-in cap
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch current weather conditions for the town
    Weather {
        /// Emit conditions as JSON
        #[arg(long)]
        json: bool,

        /// Keep polling at the configured interval until interrupted
        #[arg(long)]
        watch: bool,
    },

    /// Serve the portal HTTP API (/api/search, /api/weather)
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
}
