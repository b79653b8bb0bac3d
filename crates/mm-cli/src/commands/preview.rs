//! Preview command implementation

use mm_core::{render_preview, MigrationFile};

/// List the migrations that a merge would include, without writing anything
pub fn execute(files: &[MigrationFile]) {
    println!("Migration files found:");
    println!();
    print!("{}", render_preview(files));
}
