//! Command handlers.
//!
//! Each handler renders to stdout/stderr and returns `anyhow::Result`;
//! failures that carry an exit code are wrapped in [`crate::CliError`].

pub mod check;
pub mod devices;
pub mod inspect;
