//! Helper subprocess execution with a streaming stdout relay.
//!
//! Each call launches one child, forwards its stdout to a sink line by line as
//! it arrives, and only returns once the child has been reaped. A child that
//! prints nothing produces the [`NO_OUTPUT_PLACEHOLDER`] line instead.

mod invocation;
mod lines;
mod system;

use std::io::{self, Write};
use thiserror::Error;

pub use invocation::CommandInvocation;
pub use lines::{Line, LineReader};
pub use system::SystemRunner;

/// Written in place of helper output when the helper printed nothing.
pub const NO_OUTPUT_PLACEHOLDER: &str = "(no output)";

/// Failures of a single helper invocation. None of them are fatal to a run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The child could not be started at all.
    #[error("Failed to run command: {command}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Reading the child's stdout failed; relaying stopped early.
    #[error("Error reading command output: {source}")]
    Read {
        #[source]
        source: io::Error,
    },

    /// Collecting the child's exit status failed.
    #[error("Error closing command stream: {source}")]
    Close {
        #[source]
        source: io::Error,
    },

    /// Writing to our own output failed.
    #[error("Error writing command output: {source}")]
    Sink {
        #[source]
        source: io::Error,
    },
}

/// What a completed relay produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaySummary {
    /// Lines forwarded to the sink (0 means the placeholder was printed).
    pub lines: usize,
    /// Helper exit code; `None` when it was killed by a signal.
    pub exit_code: Option<i32>,
}

impl RelaySummary {
    /// The helper exited with status 0.
    pub const fn succeeded(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Port for running a helper and relaying its stdout.
pub trait CommandRunner {
    /// Run `invocation` to completion, streaming its stdout into `sink`.
    fn relay(
        &self,
        invocation: &CommandInvocation,
        sink: &mut dyn Write,
    ) -> Result<RelaySummary, RunError>;
}
