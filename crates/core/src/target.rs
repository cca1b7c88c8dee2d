//! Migration target types.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Identity of a migration target: which module, which environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetKey {
    pub module: String,
    pub environment: String,
}

impl TargetKey {
    pub fn new(module: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            environment: environment.into(),
        }
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.module, self.environment)
    }
}

/// A database the migration tool can be pointed at.
///
/// The connection URL is kept exactly as configured; both `postgres://`
/// and `postgresql://` schemes occur and neither is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationTarget {
    pub module: String,
    pub environment: String,
    pub connection_url: String,
    /// Directory, relative to the repository root, holding this module's schema.
    pub schema_dir: String,
}

impl MigrationTarget {
    pub fn new(
        module: impl Into<String>,
        environment: impl Into<String>,
        connection_url: impl Into<String>,
        schema_dir: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            environment: environment.into(),
            connection_url: connection_url.into(),
            schema_dir: schema_dir.into(),
        }
    }

    pub fn key(&self) -> TargetKey {
        TargetKey::new(&self.module, &self.environment)
    }

    pub fn matches(&self, module: &str, environment: &str) -> bool {
        self.module == module && self.environment == environment
    }

    /// The working directory for this target under the given repository root.
    pub fn schema_path(&self, root: &Path) -> PathBuf {
        root.join(&self.schema_dir)
    }
}
