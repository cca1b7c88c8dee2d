use std::io;
use std::path::PathBuf;

/// Exit code for an unknown or ambiguous migration target.
pub const EXIT_TARGET: u8 = 2;
/// Exit code when the migration tool exists but cannot be executed.
pub const EXIT_NOT_EXECUTABLE: u8 = 126;
/// Exit code when the migration tool is not on the search path.
pub const EXIT_TOOL_MISSING: u8 = 127;

#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("No migration target registered for {module}/{environment}")]
    NotFound { module: String, environment: String },

    #[error("Migration target {module}/{environment} is registered more than once")]
    DuplicateTarget { module: String, environment: String },

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot run migration tool from {}: {source}", .path.display())]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LauncherError {
    pub fn not_found(module: &str, environment: &str) -> Self {
        Self::NotFound {
            module: module.to_string(),
            environment: environment.to_string(),
        }
    }

    /// Process exit code reported for this error.
    ///
    /// Launch failures follow the shell convention: `127` for a missing
    /// program, `126` for one that exists but is not executable.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } | Self::DuplicateTarget { .. } => EXIT_TARGET,
            Self::Launch { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_TOOL_MISSING,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => 1,
            },
            Self::WorkingDir { .. } => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
