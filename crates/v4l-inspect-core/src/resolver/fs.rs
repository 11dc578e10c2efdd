//! Filesystem provider trait for testable path resolution.

use super::types::AttemptOutcome;
use std::path::Path;

/// Trait for filesystem operations (injectable for testing).
pub trait FsProvider {
    /// Check whether `path` is a regular file the effective user may execute.
    fn check_executable(&self, path: &Path) -> AttemptOutcome;
}

/// Production filesystem provider that uses real filesystem operations.
pub struct SystemFs;

impl FsProvider for SystemFs {
    fn check_executable(&self, path: &Path) -> AttemptOutcome {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return AttemptOutcome::NotFound;
            }
            Err(e) => return AttemptOutcome::IoError(e.to_string()),
        };

        if !metadata.is_file() {
            return AttemptOutcome::NotAFile;
        }

        // access(2) answers for the caller's credentials, not just the mode bits
        #[cfg(unix)]
        {
            use nix::unistd::{AccessFlags, access};
            if access(path, AccessFlags::X_OK).is_err() {
                return AttemptOutcome::NotExecutable;
            }
        }

        AttemptOutcome::Ok
    }
}

/// Test/mock filesystem provider with predefined responses.
#[cfg(test)]
#[derive(Default)]
pub struct MockFs {
    executables: std::collections::HashSet<std::path::PathBuf>,
    non_executables: std::collections::HashSet<std::path::PathBuf>,
}

#[cfg(test)]
impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.executables.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_non_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.non_executables.insert(path.into());
        self
    }
}

#[cfg(test)]
impl FsProvider for MockFs {
    fn check_executable(&self, path: &Path) -> AttemptOutcome {
        if self.executables.contains(path) {
            AttemptOutcome::Ok
        } else if self.non_executables.contains(path) {
            AttemptOutcome::NotExecutable
        } else {
            AttemptOutcome::NotFound
        }
    }
}
