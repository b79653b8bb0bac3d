//! mm-core - Core library for merge-migrations
//!
//! This crate provides migration discovery and ordering, the merged script
//! format, the merge engine, and the preview listing used by the
//! `merge-migrations` binary.

pub mod config;
pub mod error;
pub mod format;
pub mod merge;
pub mod migration;
pub mod preview;

pub use config::{MergeConfig, PsqlConfig};
pub use error::{CoreError, CoreResult};
pub use merge::{merge_migrations, FailedFile, MergeObserver, MergeSummary, NoopObserver};
pub use migration::{discover_migrations, sort_key, MigrationFile, UNORDERED_SORT_KEY};
pub use preview::render_preview;
