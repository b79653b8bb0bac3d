//! CLI command implementations

pub(crate) mod merge;
pub(crate) mod preview;
pub(crate) mod prompt;
