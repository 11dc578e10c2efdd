//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Inspect V4L2 video capture devices through `v4l2-ctl`.
///
/// Without a subcommand every `/dev/video*` character device is inspected.
#[derive(Parser)]
#[command(name = "v4l-inspect")]
#[command(about = "Read-only inspection of V4L2 video capture devices")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run; a bare invocation means `inspect`.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_inspects() {
        let cli = Cli::parse_from(["v4l-inspect"]);
        assert!(!cli.verbose);
        assert_eq!(cli.command_or_default(), Commands::Inspect);
    }

    #[test]
    fn global_verbose_after_subcommand() {
        let cli = Cli::parse_from(["v4l-inspect", "devices", "--json", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.command_or_default(), Commands::Devices { json: true });
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["v4l-inspect", "--device", "/dev/video0"]).is_err());
    }
}
