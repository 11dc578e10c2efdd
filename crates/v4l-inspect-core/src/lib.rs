//! Core of `v4l-inspect`: find video capture nodes and report on each one by
//! relaying the output of an external helper (`v4l2-ctl`).
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`resolver`] finds the helper on the search path.
//! 2. [`devices`] expands `/dev/video*` and keeps character devices.
//! 3. [`runner`] launches the helper per device and relays its stdout.
//! 4. [`inspect`] ties the three together and frames the report.
//!
//! Nothing is captured from the devices and nothing is configured; the
//! helper's output is passed through without interpretation.

pub mod config;
pub mod devices;
pub mod error;
pub mod inspect;
pub mod probe;
pub mod resolver;
pub mod runner;

pub use config::InspectConfig;
pub use devices::{Enumeration, enumerate_devices};
pub use error::InspectError;
pub use inspect::{InspectOutcome, InspectSummary, Inspector};
pub use probe::{Dependency, DependencyStatus, ToolProbe};
pub use resolver::{ResolveError, resolve_executable};
pub use runner::{CommandInvocation, CommandRunner, RelaySummary, RunError, SystemRunner};
