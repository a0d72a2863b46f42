use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "redline")]
#[command(about = "Review and correct document redactions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Redaction server base URL (overrides config)
    #[arg(long, global = true, env = "REDLINE_SERVER")]
    pub server: Option<String>,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the terms on a review page
    Inspect {
        /// Saved review page (HTML)
        page: PathBuf,
    },

    /// Apply edits to a review page and render the server preview
    Preview {
        /// Saved review page (HTML)
        page: PathBuf,

        /// Set one term's action: TERM=ACTION or TERM=CUSTOM:VALUE
        #[arg(long = "set", value_name = "TERM=ACTION")]
        sets: Vec<String>,

        /// Set every term under a group heading: LABEL=ACTION
        #[arg(long = "group", value_name = "LABEL=ACTION")]
        groups: Vec<String>,

        /// Add an ad-hoc term: TERM=REPLACEMENT
        #[arg(long = "add", value_name = "TERM=REPLACEMENT")]
        adds: Vec<String>,
    },

    /// Change the action of one redacted term on the server
    Edit {
        /// Saved review page (HTML)
        page: PathBuf,

        /// Original text of the redacted term
        term: String,

        /// New action (ignore/redact/mask/custom); read from stdin if omitted
        #[arg(long)]
        action: Option<String>,
    },

    /// Search the loaded document
    Search {
        /// Text to look for
        query: String,
    },

    /// Show configuration
    Config {
        /// Only print the config file location
        #[arg(long)]
        path: bool,
    },
}
