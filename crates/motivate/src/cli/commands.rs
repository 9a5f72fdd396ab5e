//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MotivateNow - AI-generated motivational quotes and quote artwork
#[derive(Parser, Debug)]
#[command(name = "motivate")]
#[command(about = "AI-generated motivational quotes and quote artwork", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one quote
    Quote {
        /// Theme of the quote (random when neither theme nor concept is given)
        #[arg(long)]
        theme: Option<String>,

        /// Style of the quote (random when omitted)
        #[arg(long)]
        style: Option<String>,

        /// Concept to steer the theme; may be repeated
        #[arg(long = "concept")]
        concepts: Vec<String>,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate an image for a quote and save it
    Visualize {
        /// Quote to render
        #[arg(long)]
        quote: String,

        /// Output file
        #[arg(long, default_value = motivate::DEFAULT_DOWNLOAD_NAME)]
        out: PathBuf,
    },

    /// Read commands from stdin, one per line
    Interactive,
}
