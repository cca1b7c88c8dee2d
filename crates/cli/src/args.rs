//! Command-line arguments for the `schemactl` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use schemactl_core::DEFAULT_TOOL;

/// Apply database schemas by module and environment.
#[derive(Debug, Parser)]
#[command(name = "schemactl", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the migration tool against a registered target.
    Apply {
        #[command(flatten)]
        target: TargetArgs,

        /// Repository root; the tool runs from the target's schema directory under it.
        #[arg(long)]
        root: Option<PathBuf>,

        /// Migration tool to execute.
        #[arg(long, default_value = DEFAULT_TOOL)]
        tool: String,
    },

    /// Print the command `apply` would run, without running it.
    Show {
        #[command(flatten)]
        target: TargetArgs,

        /// Migration tool to execute.
        #[arg(long, default_value = DEFAULT_TOOL)]
        tool: String,
    },

    /// List registered targets.
    List {
        /// Emit a JSON array instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct TargetArgs {
    /// Module name, e.g. `books`.
    pub module: String,
    /// Environment name, e.g. `dev`.
    pub environment: String,
}
