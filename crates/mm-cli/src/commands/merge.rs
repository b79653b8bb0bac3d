//! Merge command implementation

use anyhow::{Context, Result};
use chrono::Local;
use mm_core::{merge_migrations, MergeObserver, MergeSummary, MigrationFile};
use std::io::BufReader;

use crate::commands::prompt;
use crate::context::RunContext;

/// Execute the merge and report the result.
///
/// When `interactive` is set the operator is offered a look at the head of
/// the generated script afterwards.
pub async fn execute(ctx: &RunContext, files: &[MigrationFile], interactive: bool) -> Result<()> {
    println!("Merging SQL files into: {}", ctx.output_path.display());
    println!();

    let mut observer = ConsoleObserver {
        verbose: ctx.verbose,
    };
    let summary = merge_migrations(
        files,
        &ctx.output_path,
        &ctx.config,
        Local::now().naive_local(),
        &mut observer,
    )
    .context("Merge failed")?;

    print_summary(&summary);
    print_next_steps(ctx);

    if interactive {
        let stdin = Box::new(BufReader::new(std::io::stdin()));
        prompt::offer_output_preview(&summary.output, stdin).await?;
    }

    Ok(())
}

/// Prints per-file progress; read failures are always shown
struct ConsoleObserver {
    verbose: bool,
}

impl MergeObserver for ConsoleObserver {
    fn file_started(&mut self, index: usize, total: usize, file: &MigrationFile) {
        if self.verbose {
            println!("  [{}/{}] merging {}", index, total, file.name);
        }
    }

    fn file_merged(&mut self, _file: &MigrationFile, lines: usize) {
        if self.verbose {
            println!("      merged ({} lines)", lines);
        }
    }

    fn file_failed(&mut self, file: &MigrationFile, error: &std::io::Error) {
        println!("      read failed for {}: {}", file.name, error);
    }
}

fn print_summary(summary: &MergeSummary) {
    println!("Merge complete! {} files merged", summary.files_merged);
    if !summary.failed.is_empty() {
        println!(
            "  {} file{} replaced by an error placeholder:",
            summary.failed.len(),
            if summary.failed.len() == 1 { "" } else { "s" }
        );
        for failed in &summary.failed {
            println!("    {}: {}", failed.name, failed.error);
        }
    }
    println!("Output file info:");
    println!("   Path: {}", summary.output.display());
    println!(
        "   Size: {} bytes ({:.1} KB)",
        format_thousands(summary.output_size),
        summary.output_size_kib()
    );
}

fn print_next_steps(ctx: &RunContext) {
    println!();
    println!("Next steps:");
    println!("   1. Review the generated file");
    println!("   2. Edit it by hand if needed");
    println!(
        "   3. Run the SQL file: {}",
        ctx.config.psql.command_for(&ctx.output_arg)
    );
    println!();
    println!("Important:");
    println!("   - Back up the database before running the script");
    println!("   - Verify it in a test environment first");
    println!("   - The script drops and recreates all objects");
    println!();
}

/// Format `n` with comma thousands separators
fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
