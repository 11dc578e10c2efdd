//! Helper executable resolution.
//!
//! Looks a tool name up in the directories of a colon-separated search path
//! (normally `PATH`) and returns the first `<dir>/<tool>` that the effective
//! user may execute.
//!
//! ## Architecture
//!
//! - `types`: Core types (`ResolveResult`, `Attempt`, `AttemptOutcome`)
//! - `env`: Environment variable access trait (injectable for testing)
//! - `fs`: Filesystem operations trait (injectable for testing)
//! - `search`: Search-path walking
//! - `resolve`: Resolution entry points
//!
//! ## Usage
//!
//! ```rust,no_run
//! use v4l_inspect_core::resolver::resolve_executable;
//!
//! let result = resolve_executable("v4l2-ctl", "PATH").unwrap();
//! println!("Resolved to: {}", result.resolved_path.display());
//!
//! for attempt in &result.attempts {
//!     println!("  {} - {}", attempt.candidate.display(), attempt.outcome);
//! }
//! ```
//!
//! The executable check happens at resolution time only; the file may change
//! before it is launched.

mod env;
mod fs;
mod resolve;
mod search;
mod types;

pub use env::{EnvProvider, SystemEnv};
pub use fs::{FsProvider, SystemFs};
pub use resolve::{resolve_executable, resolve_executable_with_deps};
pub use types::{Attempt, AttemptOutcome, ResolveError, ResolveResult};

#[cfg(test)]
pub use env::MockEnv;
#[cfg(test)]
pub use fs::MockFs;
