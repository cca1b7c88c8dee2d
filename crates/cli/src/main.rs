//! `schemactl` -- apply a module's database schema with `sem-apply`.
//!
//! ```text
//! schemactl apply <module> <environment> [--root <dir>] [--tool <name>]
//! schemactl show  <module> <environment> [--tool <name>]
//! schemactl list  [--json]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `schemactl=info`); logs are
//! written to stderr.

use std::process::ExitCode;

use clap::Parser;
use schemactl::args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    schemactl::logging::init();
    schemactl::entry::run(cli)
}
