//! Main executable path resolution logic.

use super::env::{EnvProvider, SystemEnv};
use super::fs::{FsProvider, SystemFs};
use super::search::ExecutableSearcher;
use super::types::{AttemptOutcome, ResolveError, ResolveResult};
use tracing::debug;

/// Resolve `command` to the first executable `<dir>/<command>` found in the
/// directories listed by the `search_var` environment variable.
pub fn resolve_executable(command: &str, search_var: &str) -> Result<ResolveResult, ResolveError> {
    resolve_executable_with_deps(command, search_var, &SystemEnv, &SystemFs)
}

/// Resolve with injected dependencies (for testing).
pub fn resolve_executable_with_deps(
    command: &str,
    search_var: &str,
    env: &dyn EnvProvider,
    fs: &dyn FsProvider,
) -> Result<ResolveResult, ResolveError> {
    if command.is_empty() {
        return Err(ResolveError::EmptyCommand);
    }

    let searcher = ExecutableSearcher::new(env, fs);
    let Some(path_value) = searcher.search_path(search_var) else {
        debug!(%command, var = %search_var, "search path unset; nothing to resolve against");
        return Err(ResolveError::SearchPathUnset {
            var: search_var.to_string(),
        });
    };

    let attempts = searcher.search_in(&path_value, command);
    for attempt in &attempts {
        debug!(
            candidate = %attempt.candidate.display(),
            outcome = %attempt.outcome,
            "checked candidate"
        );
    }

    match attempts.iter().find(|a| a.outcome == AttemptOutcome::Ok) {
        Some(hit) => Ok(ResolveResult {
            resolved_path: hit.candidate.clone(),
            attempts,
        }),
        None => Err(ResolveError::not_resolved(command, &attempts)),
    }
}
