//! CLI bootstrap - the composition root.
//!
//! The only place where concrete OS-backed implementations are chosen.
//! Handlers receive a [`CliContext`] and never construct their own.

use v4l_inspect_core::{InspectConfig, SystemRunner};

/// Bootstrap configuration for the CLI.
///
/// Fixed defaults only; the tool reads no config files and no environment
/// variables besides the executable search path.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Device discovery and helper settings.
    pub inspect: InspectConfig,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub config: CliConfig,
    /// Runner used for every helper invocation.
    pub runner: SystemRunner,
}

/// Compose the CLI context from its configuration.
pub fn bootstrap(config: CliConfig) -> CliContext {
    tracing::debug!(
        tool = %config.inspect.tool,
        pattern = %config.inspect.pattern(),
        "bootstrapped"
    );
    CliContext {
        config,
        runner: SystemRunner::new(),
    }
}
