use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[clap(
    name = "envreg",
    about = "Registry of named environment records",
    version,
    after_help = "Settings are read from --config, then from ENVREG_* environment variables."
)]
pub struct Cli {
    /// Path to a TOML config file
    #[clap(long, global = true)]
    pub config: Option<String>,

    /// Address to serve on, or of the registry to talk to
    #[clap(long, global = true)]
    pub server: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the registry HTTP server
    Serve,

    /// List every environment
    List {
        /// Output the records as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Show a single environment
    Get { name: String },

    /// Create or replace an environment
    Put {
        /// The record as JSON, including its envName
        #[clap(required_unless_present = "file", conflicts_with = "file")]
        record: Option<String>,

        /// Read the record from a JSON file instead
        #[clap(long, short)]
        file: Option<PathBuf>,
    },

    /// Delete an environment
    Delete { name: String },

    /// Print the resolved configuration
    Config,
}
