//! Search-path walking.

use super::env::EnvProvider;
use super::fs::FsProvider;
use super::types::{Attempt, AttemptOutcome};
use std::ffi::OsString;
use std::path::PathBuf;

/// Walks the directories of a colon-separated search path looking for an executable.
pub struct ExecutableSearcher<'a> {
    env: &'a dyn EnvProvider,
    fs: &'a dyn FsProvider,
}

impl<'a> ExecutableSearcher<'a> {
    pub fn new(env: &'a dyn EnvProvider, fs: &'a dyn FsProvider) -> Self {
        Self { env, fs }
    }

    /// Read the search path variable, treating an empty value like an unset one.
    pub fn search_path(&self, var: &str) -> Option<OsString> {
        self.env.get(var).filter(|value| !value.is_empty())
    }

    /// Check `<dir>/<command>` for every directory of `path_value`, in order.
    ///
    /// Empty segments (`::`, leading or trailing `:`) are skipped rather than
    /// read as the current directory. Stops at the first executable candidate.
    pub fn search_in(&self, path_value: &OsString, command: &str) -> Vec<Attempt> {
        let mut attempts = Vec::new();

        for dir in std::env::split_paths(path_value) {
            if dir.as_os_str().is_empty() {
                continue;
            }

            let mut candidate = PathBuf::from(dir);
            candidate.push(command);

            let outcome = self.fs.check_executable(&candidate);
            let found = outcome == AttemptOutcome::Ok;
            attempts.push(Attempt { candidate, outcome });
            if found {
                return attempts; // Early return on first success
            }
        }

        attempts
    }
}
