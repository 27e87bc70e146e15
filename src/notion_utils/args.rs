use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nutil", version)]
#[command(about = "Helpers for Notion ids, signed file URLs and JSON records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json
    #[arg(long, global = true, env = "NUTIL_HOME")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical id of each Notion URL or id
    Id {
        /// Page URLs, block links or bare ids
        #[arg(required = true, num_args = 1..)]
        inputs: Vec<String>,
    },

    /// Look up a dotted path (e.g. block.0.value.type) in a JSON document
    Get {
        /// Dotted path; array elements are addressed by index
        path: String,

        /// JSON file to read; stdin when omitted or "-"
        file: Option<PathBuf>,

        /// JSON value to print when the path does not resolve
        #[arg(short, long)]
        default: Option<String>,

        /// Print strings without JSON quotes
        #[arg(short, long)]
        raw: bool,
    },

    /// Route S3 file URLs through Notion's signed proxy
    Sign {
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,
    },

    /// Strip the signed proxy prefix from file URLs
    Unsign {
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (base-url, signed-url-prefix, s3-url-prefix)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
