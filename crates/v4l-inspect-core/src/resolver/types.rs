//! Types for helper executable resolution.

use std::fmt::{self, Write as _};
use std::path::PathBuf;

/// A resolved helper plus the trail that led to it.
#[derive(Debug, Clone)]
pub struct ResolveResult {
    /// Directory entry that passed the executable check (`<dir>/<tool>`).
    pub resolved_path: PathBuf,
    /// Every candidate that was checked, in search order (for diagnostics).
    pub attempts: Vec<Attempt>,
}

/// One `<dir>/<tool>` candidate and what the check said about it.
#[derive(Debug, Clone)]
pub struct Attempt {
    /// The path that was checked.
    pub candidate: PathBuf,
    /// The outcome of checking this candidate.
    pub outcome: AttemptOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// File was found and the effective user may execute it.
    Ok,
    /// Path does not exist.
    NotFound,
    /// Path exists but is not a file (e.g., directory).
    NotAFile,
    /// File exists but the effective user may not execute it.
    NotExecutable,
    /// Other I/O error occurred.
    IoError(String),
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NotFound => write!(f, "not found"),
            Self::NotAFile => write!(f, "not a file"),
            Self::NotExecutable => write!(f, "not executable"),
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

/// Why no helper could be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Helper name is empty")]
    EmptyCommand,

    #[error("Search path variable {var} is unset or empty")]
    SearchPathUnset { var: String },

    #[error("No executable '{command}' on the search path. Tried:\n{attempts}")]
    NotResolved { command: String, attempts: String },
}

impl ResolveError {
    /// Build a `NotResolved` error listing every candidate, one per line.
    pub fn not_resolved(command: impl Into<String>, attempts: &[Attempt]) -> Self {
        let mut listing = String::new();
        for attempt in attempts {
            if !listing.is_empty() {
                listing.push('\n');
            }
            let _ = write!(listing, "  {}: {}", attempt.candidate.display(), attempt.outcome);
        }
        if listing.is_empty() {
            listing.push_str("  (no candidates checked)");
        }

        Self::NotResolved {
            command: command.into(),
            attempts: listing,
        }
    }
}
