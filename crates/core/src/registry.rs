//! Static registry of migration targets.
//!
//! The registry is built once at startup and never mutated afterwards.
//! Entries keep the order they were registered in so listings are stable.

use std::collections::HashSet;

use crate::error::LauncherError;
use crate::target::MigrationTarget;

/// Built-in targets: `(module, environment, connection URL, schema dir)`.
const BUILTIN_TARGETS: &[(&str, &str, &str, &str)] = &[
    (
        "books",
        "dev",
        "postgresql://postgres@localhost/useless_books_dev",
        "modules/apis/books/schema",
    ),
    (
        "core",
        "dev",
        "postgres://localhost/useless_core_dev",
        "modules/apis/core/schema",
    ),
    (
        "core",
        "test",
        "postgres://localhost/useless_core_test",
        "modules/apis/core/schema",
    ),
    (
        "workouts",
        "legacy",
        "postgres://localhost:5432/workouts",
        "modules/apis/workouts",
    ),
    (
        "workouts",
        "dev",
        "postgres://localhost:5432/useless_workouts_dev",
        "modules/apis/workouts/schema",
    ),
    (
        "workouts",
        "test",
        "postgres://localhost:5432/useless_workouts_test",
        "modules/apis/workouts/schema",
    ),
];

/// Ordered, read-only mapping from `(module, environment)` to a target.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    targets: Vec<MigrationTarget>,
}

impl Registry {
    /// Build a registry from `targets`, rejecting duplicate identities.
    pub fn from_targets(
        targets: impl IntoIterator<Item = MigrationTarget>,
    ) -> Result<Self, LauncherError> {
        let targets: Vec<MigrationTarget> = targets.into_iter().collect();

        let mut seen = HashSet::with_capacity(targets.len());
        for target in &targets {
            if !seen.insert(target.key()) {
                return Err(LauncherError::DuplicateTarget {
                    module: target.module.clone(),
                    environment: target.environment.clone(),
                });
            }
        }

        Ok(Self { targets })
    }

    /// The registry compiled into the launcher.
    pub fn builtin() -> Self {
        Self {
            targets: BUILTIN_TARGETS
                .iter()
                .map(|&(module, environment, url, dir)| {
                    MigrationTarget::new(module, environment, url, dir)
                })
                .collect(),
        }
    }

    /// Look up the target for `module` / `environment`.
    pub fn resolve(&self, module: &str, environment: &str) -> Result<&MigrationTarget, LauncherError> {
        self.targets
            .iter()
            .find(|t| t.matches(module, environment))
            .ok_or_else(|| LauncherError::not_found(module, environment))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MigrationTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
