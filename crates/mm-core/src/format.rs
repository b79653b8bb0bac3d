//! Text blocks that make up a merged migration script
//!
//! The layout is header, one delimited section per migration, then footer.
//! Everything except the timestamp line is deterministic.

use crate::config::MergeConfig;
use chrono::NaiveDateTime;

/// Banner line used around the header, footer, and every section title
pub const BANNER: &str = "-- ========================================";

/// `strftime` format of the generation timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Header written once at the top of the merged script
pub fn header(config: &MergeConfig, output_name: &str, generated_at: NaiveDateTime) -> String {
    format!(
        "{BANNER}
-- {title} merged migration script
--
-- Generated at: {timestamp}
-- Description: all migration scripts merged into one file for execution and deployment
--
-- Usage:
--   {command}
--
-- Notes:
--   1. Make sure the database has been created
--   2. Make sure the user has sufficient privileges
--   3. The script drops existing objects before recreating them, use with care
{BANNER}

-- Running migration scripts...

",
        title = config.title,
        timestamp = generated_at.format(TIMESTAMP_FORMAT),
        command = config.psql.command_for(output_name),
    )
}

/// Delimiter block opening the section for `name`
pub fn section_start(name: &str) -> String {
    format!("\n{BANNER}\n-- File: {name}\n{BANNER}\n\n")
}

/// Comment written in place of content that could not be read
pub fn read_failure(name: &str, error: &str) -> String {
    format!("-- Error: could not read file {name}: {error}\n")
}

/// Marker closing the section for `name`
pub fn section_end(name: &str) -> String {
    format!("\n-- File {name} merged\n")
}

/// Footer written once after the last section
pub fn footer(file_count: usize) -> String {
    format!(
        "
{BANNER}
-- Migration merge complete
-- Merged {file_count} files
{BANNER}

-- Tip: back up the database before running this script
-- Tip: verify the script in a test environment first
"
    )
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
