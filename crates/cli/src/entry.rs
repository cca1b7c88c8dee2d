//! Entry-point logic shared by all binaries.
//!
//! Each function returns the [`ExitCode`] the process should exit with.
//! A successful launch never returns here: the migration tool replaces
//! the process and supplies its own exit status.

use std::io::{self, Write};
use std::process::ExitCode;

use schemactl_core::{Launcher, LauncherError, Registry};

use crate::args::{Cli, Command};
use crate::logging;

/// Entry point for a binary bound to one registered target.
pub fn run_registered(module: &str, environment: &str) -> ExitCode {
    logging::init();

    let launcher = Launcher::new(Registry::builtin());
    match launcher.launch(module, environment, &mut io::stdout()) {
        Ok(never) => match never {},
        Err(err) => fail(&err),
    }
}

/// Entry point for the `schemactl` binary.
pub fn run(cli: Cli) -> ExitCode {
    let registry = Registry::builtin();

    match cli.command {
        Command::Apply { target, root, tool } => {
            let mut launcher = Launcher::new(registry).tool(tool);
            if let Some(root) = root {
                launcher = launcher.root(root);
            }
            match launcher.launch(&target.module, &target.environment, &mut io::stdout()) {
                Ok(never) => match never {},
                Err(err) => fail(&err),
            }
        }
        Command::Show { target, tool } => {
            let launcher = Launcher::new(registry).tool(tool);
            match launcher.resolve(&target.module, &target.environment) {
                Ok(resolved) => {
                    println!("{}", launcher.build_command(resolved));
                    ExitCode::SUCCESS
                }
                Err(err) => fail(&err),
            }
        }
        Command::List { json } => {
            let rendered = if json {
                match render_json(&registry) {
                    Ok(rendered) => rendered,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to serialize registry");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                render_table(&registry)
            };
            let mut stdout = io::stdout().lock();
            if let Err(err) = writeln!(stdout, "{rendered}") {
                tracing::error!(error = %err, "Failed to write listing");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}

/// Report `err` on stderr and map it to an exit code.
fn fail(err: &LauncherError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::from(err.exit_code())
}

/// One `module/environment  url` line per target, keys padded to align.
pub fn render_table(registry: &Registry) -> String {
    let width = registry
        .iter()
        .map(|t| t.key().to_string().len())
        .max()
        .unwrap_or(0);

    registry
        .iter()
        .map(|t| format!("{:<width$}  {}", t.key().to_string(), t.connection_url))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(registry: &Registry) -> Result<String, serde_json::Error> {
    let targets: Vec<_> = registry.iter().collect();
    serde_json::to_string_pretty(&targets)
}
