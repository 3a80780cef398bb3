//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seoinject")]
#[command(about = "Inject SEO meta tags into HTML templates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: SEOINJECT_CONFIG, or seoinject.toml found upward)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log every file processed
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter seoinject.toml
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Inject tags into every template that lacks them
    Apply {
        /// Report what would change without writing files
        #[arg(long)]
        dry_run: bool,

        /// Templates directory (overrides templates_dir from the config)
        #[arg(long, value_name = "DIR")]
        templates_dir: Option<PathBuf>,
    },

    /// Print the tag block a template would receive
    Preview {
        /// Template name relative to the templates directory (e.g., login.html)
        file: String,
    },
}
