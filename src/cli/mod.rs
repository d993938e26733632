pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedmill")]
#[command(about = "Convert Atom, RSS and JSON Feed documents to JSON Feed 1.1", long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ~/.config/feedmill/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a feed to JSON Feed 1.1
    Convert {
        /// Feed file to read, or "-" for stdin
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Show what a feed normalizes to
    Inspect {
        /// Feed file to read, or "-" for stdin
        input: PathBuf,
    },
}
