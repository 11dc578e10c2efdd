//! `v4l-inspect` command-line adapter.
//!
//! Parsing, composition and presentation live here; discovery, helper
//! resolution and the report pipeline live in `v4l_inspect_core`.

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
