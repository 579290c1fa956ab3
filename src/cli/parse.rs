//! CLI parse: clap types for restring. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Restring CLI - recursive literal string replacement
#[derive(Parser)]
#[command(name = "restring", version)]
#[command(about = "Recursively replace strings in files and filenames within a Git-controlled directory")]
pub struct Cli {
    /// Directory to process (must contain a .git entry)
    pub directory: PathBuf,

    /// String replacement in the format 'old=new'
    #[arg(short, long)]
    pub replace: String,

    /// Maximum number of files allowed (default: 100)
    #[arg(short, long)]
    pub maxfiles: Option<usize>,

    /// Directory names to skip (default: .git)
    #[arg(short, long, value_delimiter = ',')]
    pub skip_dirs: Option<Vec<String>>,

    /// Match skip directory names case-insensitively
    #[arg(long)]
    pub skip_ignore_case: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
