//! `schemactl` library crate.
//!
//! Holds the argument parser, logging setup, and the entry-point logic
//! shared by the `schemactl` binary and the per-target binaries under
//! `src/bin/`. Exposed as a library for integration testing.

pub mod args;
pub mod entry;
pub mod logging;
