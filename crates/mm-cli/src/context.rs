//! Runtime context for a merge-migrations run

use anyhow::{Context, Result};
use mm_core::MergeConfig;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Resolved paths and configuration for one run
#[derive(Debug)]
pub struct RunContext {
    /// Directory treated as the tool's home: holds migrations, config, and output
    pub base_dir: PathBuf,

    /// Loaded configuration (defaults when no config file exists)
    pub config: MergeConfig,

    /// Directory scanned for `*.sql` migrations
    pub migrations_dir: PathBuf,

    /// Output file name as given on the command line or in config
    pub output_arg: String,

    /// Output file path resolved against `base_dir`
    pub output_path: PathBuf,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RunContext {
    /// Resolve the run context from command-line arguments
    pub fn new(cli: &Cli) -> Result<Self> {
        let base_dir = match &cli.base_dir {
            Some(dir) => dir.clone(),
            None => executable_dir()?,
        };

        let config = match &cli.config {
            Some(path) => MergeConfig::load(path).context("Failed to load configuration file")?,
            None => MergeConfig::load_from_dir(&base_dir)
                .context("Failed to load project configuration")?,
        };

        let output_arg = cli
            .output
            .clone()
            .unwrap_or_else(|| config.output.clone());
        let output_path = base_dir.join(&output_arg);
        let migrations_dir = config.migrations_path(&base_dir);

        let ctx = Self {
            base_dir,
            config,
            migrations_dir,
            output_arg,
            output_path,
            verbose: cli.verbose,
        };
        log::debug!("Base directory: {}", ctx.base_dir.display());
        Ok(ctx)
    }

    /// Print the run banner with source and output locations
    pub fn print_banner(&self) {
        println!("{}", "=".repeat(50));
        println!("{} migration merge tool", self.config.title);
        println!("{}", "=".repeat(50));
        println!("Source directory: {}", self.migrations_dir.display());
        println!("Output file: {}", self.output_path.display());
        println!();
    }
}

/// Directory containing the running executable
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("Executable path has no parent directory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("merge-migrations").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_resolve_against_base_dir() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().to_str().unwrap();
        let ctx = RunContext::new(&parse(&["--base-dir", base])).unwrap();

        assert_eq!(ctx.base_dir, dir.path());
        assert_eq!(ctx.migrations_dir, dir.path().join("migrations"));
        assert_eq!(ctx.output_arg, "all_migrations.sql");
        assert_eq!(ctx.output_path, dir.path().join("all_migrations.sql"));
        assert!(!ctx.verbose);
    }

    #[test]
    fn test_output_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("merge-migrations.yml"),
            "output: from_config.sql\nmigrations_dir: sql\n",
        )
        .unwrap();
        let base = dir.path().to_str().unwrap();

        let ctx = RunContext::new(&parse(&["-d", base])).unwrap();
        assert_eq!(ctx.output_arg, "from_config.sql");
        assert_eq!(ctx.migrations_dir, dir.path().join("sql"));

        let ctx = RunContext::new(&parse(&["-d", base, "-o", "flag.sql", "-v"])).unwrap();
        assert_eq!(ctx.output_path, dir.path().join("flag.sql"));
        assert!(ctx.verbose);
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().to_str().unwrap();
        let missing = dir.path().join("missing.yml");

        let err = RunContext::new(&parse(&["-d", base, "-c", missing.to_str().unwrap()]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("Config file not found"));
    }

    #[test]
    fn test_default_base_dir_is_executable_dir() {
        let ctx = RunContext::new(&parse(&[])).unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(ctx.base_dir.as_path()), exe.parent());
    }
}
