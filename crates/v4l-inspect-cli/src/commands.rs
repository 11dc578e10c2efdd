//! Available subcommands.

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Commands {
    /// Report capabilities and formats of every video device (default)
    #[default]
    Inspect,

    /// List video device nodes without running the helper
    Devices {
        /// Print the enumeration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that camera tools are installed and devices are visible
    Check,
}
