//! Configuration types and parsing for merge-migrations.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names probed, in order, when loading configuration from a directory
pub const CONFIG_FILE_NAMES: [&str; 2] = ["merge-migrations.yml", "merge-migrations.yaml"];

/// Default name of the merged output file
pub const DEFAULT_OUTPUT: &str = "all_migrations.sql";

/// Default migrations directory, relative to the base directory
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

/// Project configuration from merge-migrations.yml
///
/// Every field is optional; a missing file is equivalent to an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    /// Title shown in the console banner and the merged file header
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory holding the `*.sql` migrations
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,

    /// Output file name used when `--output` is not given
    #[serde(default = "default_output")]
    pub output: String,

    /// Connection details rendered into the `psql` usage hints
    #[serde(default)]
    pub psql: PsqlConfig,
}

/// Connection details for the `psql` command shown to the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PsqlConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_database")]
    pub database: String,
}

fn default_title() -> String {
    "Database".to_string()
}

fn default_migrations_dir() -> String {
    DEFAULT_MIGRATIONS_DIR.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_database() -> String {
    "postgres".to_string()
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            migrations_dir: default_migrations_dir(),
            output: default_output(),
            psql: PsqlConfig::default(),
        }
    }
}

impl Default for PsqlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            user: default_user(),
            database: default_database(),
        }
    }
}

impl PsqlConfig {
    /// Render the `psql` invocation that runs `file`
    pub fn command_for(&self, file: &str) -> String {
        format!(
            "psql -h {} -U {} -d {} -f {}",
            self.host, self.user, self.database, file
        )
    }
}

impl MergeConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: MergeConfig =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                path: path.display().to_string(),
                source: e,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a base directory
    ///
    /// Looks for merge-migrations.yml or merge-migrations.yaml and falls back
    /// to the defaults when neither exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Return the first config file present in `dir`, if any
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Absolute path of the migrations directory under `base`
    pub fn migrations_path(&self, base: &Path) -> PathBuf {
        base.join(&self.migrations_dir)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "title cannot be empty".to_string(),
            });
        }
        if self.migrations_dir.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migrations_dir cannot be empty".to_string(),
            });
        }
        if self.output.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "output cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
