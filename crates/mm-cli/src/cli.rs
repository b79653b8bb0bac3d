//! CLI argument definitions using clap derive API

use clap::Parser;
use std::path::PathBuf;

/// Merge numbered SQL migration files into a single ordered script
#[derive(Parser, Debug)]
#[command(name = "merge-migrations")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  merge-migrations                      # merge into all_migrations.sql
  merge-migrations --preview            # list the migration files
  merge-migrations --output custom.sql  # choose the output file name
  merge-migrations --verbose            # show per-file progress")]
pub struct Cli {
    /// Output file name, relative to the base directory [default: all_migrations.sql]
    #[arg(short, long)]
    pub output: Option<String>,

    /// List the migration files without merging
    #[arg(short, long)]
    pub preview: bool,

    /// Show per-file progress while merging
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding migrations/ and the output [default: directory of this executable]
    #[arg(short = 'd', long)]
    pub base_dir: Option<PathBuf>,

    /// Config file path [default: merge-migrations.yml in the base directory]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
