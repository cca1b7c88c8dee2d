//! `schemactl-core` -- migration target registry and launcher.
//!
//! Maps `(module, environment)` pairs to database connection URLs and
//! hands the current process over to the external `sem-apply` tool for
//! the chosen target.

pub mod command;
pub mod error;
pub mod launcher;
pub mod process;
pub mod registry;
pub mod target;

pub use command::{build_command, CommandLine, DEFAULT_TOOL};
pub use error::LauncherError;
pub use launcher::Launcher;
pub use process::{ExecRunner, ProcessRunner};
pub use registry::Registry;
pub use target::{MigrationTarget, TargetKey};
