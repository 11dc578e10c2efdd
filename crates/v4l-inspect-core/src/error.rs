//! Run-level errors.

use crate::resolver::ResolveError;
use std::io;
use thiserror::Error;

/// Errors that end an inspection run.
///
/// Per-invocation helper failures are not here: they are reported inline and
/// the run carries on (see [`crate::runner::RunError`]).
#[derive(Debug, Error)]
pub enum InspectError {
    /// The helper executable is not on the search path.
    #[error("`{tool}` not found in PATH")]
    ToolNotFound {
        tool: String,
        #[source]
        source: ResolveError,
    },

    /// Writing the report to our own output failed.
    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

impl InspectError {
    /// Whether this is the missing-helper case.
    pub const fn is_tool_not_found(&self) -> bool {
        matches!(self, Self::ToolNotFound { .. })
    }
}
