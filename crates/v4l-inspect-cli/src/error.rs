//! CLI-specific error types and exit codes.

use thiserror::Error;
use v4l_inspect_core::InspectError;

/// Errors surfaced by command handlers.
#[derive(Debug, Error)]
pub enum CliError {
    /// The helper executable is not on the search path.
    #[error("`{0}` not found in PATH")]
    ToolNotFound(String),

    /// Required tools are missing (system check).
    #[error("Missing required tools: {}", .0.join(", "))]
    MissingTools(Vec<String>),

    /// Writing our own output failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// - 1: the helper (or another required tool) is missing
    /// - 74: I/O error on our own streams (`EX_IOERR`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ToolNotFound(_) | Self::MissingTools(_) => 1,
            Self::Io(_) => 74,
        }
    }

    /// Whether the handler already printed user-facing guidance for this error.
    pub const fn already_reported(&self) -> bool {
        matches!(self, Self::ToolNotFound(_) | Self::MissingTools(_))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<InspectError> for CliError {
    fn from(err: InspectError) -> Self {
        match err {
            InspectError::ToolNotFound { tool, .. } => Self::ToolNotFound(tool),
            InspectError::Output(e) => e.into(),
        }
    }
}
