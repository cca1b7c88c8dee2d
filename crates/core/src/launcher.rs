//! Resolve a target, print its command line, and hand over to the tool.

use std::convert::Infallible;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::command::{build_command, CommandLine, DEFAULT_TOOL};
use crate::error::LauncherError;
use crate::process::{ExecRunner, ProcessRunner};
use crate::registry::Registry;
use crate::target::MigrationTarget;

/// One-shot launcher for the migration tool.
///
/// Resolution failures are reported before anything is printed or
/// launched. A successful launch never returns: the tool takes over the
/// process and its exit status becomes ours.
#[derive(Debug)]
pub struct Launcher<R = ExecRunner> {
    registry: Registry,
    tool: String,
    root: Option<PathBuf>,
    runner: R,
}

impl Launcher<ExecRunner> {
    pub fn new(registry: Registry) -> Self {
        Self::with_runner(registry, ExecRunner)
    }
}

impl<R: ProcessRunner> Launcher<R> {
    pub fn with_runner(registry: Registry, runner: R) -> Self {
        Self {
            registry,
            tool: DEFAULT_TOOL.to_string(),
            root: None,
            runner,
        }
    }

    /// Use `tool` instead of `sem-apply`.
    pub fn tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Run the tool from each target's schema directory under `root`.
    ///
    /// Without a root the tool inherits the current working directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn resolve(&self, module: &str, environment: &str) -> Result<&MigrationTarget, LauncherError> {
        self.registry.resolve(module, environment)
    }

    pub fn build_command(&self, target: &MigrationTarget) -> CommandLine {
        build_command(&self.tool, target)
    }

    /// Working directory the tool should run in for `target`, if any.
    pub fn working_dir(&self, target: &MigrationTarget) -> Option<PathBuf> {
        self.root.as_deref().map(|root| target.schema_path(root))
    }

    /// Print `command` to `out`, then replace the process with it.
    pub fn run(
        &self,
        command: &CommandLine,
        working_dir: Option<&Path>,
        out: &mut dyn Write,
    ) -> Result<Infallible, LauncherError> {
        if let Some(dir) = working_dir {
            check_working_dir(dir)?;
        }

        if let Err(err) = writeln!(out, "{command}").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "Could not echo command line");
        }

        tracing::debug!(
            program = %command.program,
            working_dir = ?working_dir,
            "Handing over to migration tool",
        );

        let source = self.runner.replace(command, working_dir);
        tracing::error!(program = %command.program, error = %source, "Launch failed");

        Err(LauncherError::Launch {
            program: command.program.clone(),
            source,
        })
    }

    /// Resolve `module` / `environment` and run its migration command.
    pub fn launch(
        &self,
        module: &str,
        environment: &str,
        out: &mut dyn Write,
    ) -> Result<Infallible, LauncherError> {
        let target = self.resolve(module, environment)?;
        let command = self.build_command(target);
        let working_dir = self.working_dir(target);

        tracing::info!(
            migration = %target.key(),
            url = %target.connection_url,
            "Applying schema",
        );

        self.run(&command, working_dir.as_deref(), out)
    }
}

/// The tool's working directory must exist before we hand over, so a bad
/// `--root` is not mistaken for a missing tool.
fn check_working_dir(dir: &Path) -> Result<(), LauncherError> {
    let result = match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => io::Error::other("not a directory"),
        Err(err) => err,
    };
    tracing::error!(path = %dir.display(), error = %result, "Invalid working directory");
    Err(LauncherError::WorkingDir {
        path: dir.to_path_buf(),
        source: result,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
