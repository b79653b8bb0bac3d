//! Dry-run listing of discovered migrations

use crate::migration::MigrationFile;

/// Render the preview table for `files`, one numbered row per migration
/// followed by a total line. An empty list renders a notice instead.
pub fn render_preview(files: &[MigrationFile]) -> String {
    if files.is_empty() {
        return "  No SQL files found\n".to_string();
    }

    let mut out = String::new();
    for (i, file) in files.iter().enumerate() {
        out.push_str(&format!(
            "  {:2}. {:<25} ({:4} bytes)\n",
            i + 1,
            file.name,
            file.size
        ));
    }
    out.push_str(&format!("\nTotal: {} files\n", files.len()));
    out
}
