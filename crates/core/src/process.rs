//! Handing the current process over to the migration tool.
//!
//! [`ProcessRunner`] is the seam between the launcher and the OS. The
//! production implementation, [`ExecRunner`], replaces the process image
//! on Unix so the tool inherits stdio, signals, and the exit status
//! directly. Other platforms spawn the tool, wait for it, and exit with
//! its code.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::command::CommandLine;

/// Transfers control of the current process to an external command.
pub trait ProcessRunner {
    /// Run `command` in place of the current process.
    ///
    /// Never returns on success. The returned error describes why the
    /// command could not be started.
    fn replace(&self, command: &CommandLine, working_dir: Option<&Path>) -> io::Error;
}

/// Runner backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecRunner;

impl ExecRunner {
    fn command(command: &CommandLine, working_dir: Option<&Path>) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl ProcessRunner for ExecRunner {
    #[cfg(unix)]
    fn replace(&self, command: &CommandLine, working_dir: Option<&Path>) -> io::Error {
        use std::os::unix::process::CommandExt;

        Self::command(command, working_dir).exec()
    }

    #[cfg(not(unix))]
    fn replace(&self, command: &CommandLine, working_dir: Option<&Path>) -> io::Error {
        match Self::command(command, working_dir).status() {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(err) => err,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn missing_program_reports_not_found() {
        let cmd = CommandLine::new("schemactl-test-no-such-tool-7f3a", vec!["--url".into()]);
        let err = ExecRunner.replace(&cmd, None);
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn non_executable_file_reports_permission_denied() {
        // Created with mode 0600, so exec must refuse it.
        let file = tempfile::NamedTempFile::new().expect("create temp file");
        let program = file.path().to_str().expect("path").to_string();
        let err = ExecRunner.replace(&CommandLine::new(program, vec![]), None);
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
