//! Command-line construction for the migration tool.

use std::fmt;

use crate::target::MigrationTarget;

/// Name of the external migration tool.
pub const DEFAULT_TOOL: &str = "sem-apply";

/// A program plus its arguments, ready to hand to the OS.
///
/// Arguments are passed to the program directly, never through a shell,
/// so no quoting is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Build `<tool> --url <connection_url>` for `target`.
pub fn build_command(tool: &str, target: &MigrationTarget) -> CommandLine {
    CommandLine::new(
        tool,
        vec!["--url".to_string(), target.connection_url.clone()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books_dev() -> MigrationTarget {
        MigrationTarget::new(
            "books",
            "dev",
            "postgresql://postgres@localhost/useless_books_dev",
            "modules/apis/books/schema",
        )
    }

    #[test]
    fn formats_tool_and_url() {
        let cmd = build_command(DEFAULT_TOOL, &books_dev());
        assert_eq!(cmd.program, "sem-apply");
        assert_eq!(
            cmd.args,
            ["--url", "postgresql://postgres@localhost/useless_books_dev"]
        );
        assert_eq!(
            cmd.to_string(),
            "sem-apply --url postgresql://postgres@localhost/useless_books_dev"
        );
    }

    #[test]
    fn deterministic() {
        let target = books_dev();
        assert_eq!(
            build_command(DEFAULT_TOOL, &target),
            build_command(DEFAULT_TOOL, &target)
        );
    }

    #[test]
    fn custom_tool_name() {
        let cmd = build_command("/opt/sem/bin/sem-apply", &books_dev());
        assert!(cmd.to_string().starts_with("/opt/sem/bin/sem-apply --url "));
    }

    #[test]
    fn url_is_not_escaped() {
        let target = MigrationTarget::new("x", "dev", "postgres://u:p@h:5432/db?sslmode=disable", "x");
        assert_eq!(
            build_command(DEFAULT_TOOL, &target).to_string(),
            "sem-apply --url postgres://u:p@h:5432/db?sslmode=disable"
        );
    }
}
