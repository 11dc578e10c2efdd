//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use v4l_inspect_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = bootstrap(CliConfig::with_defaults());

    let result = match cli.command_or_default() {
        Commands::Inspect => handlers::inspect::execute(&ctx),
        Commands::Devices { json } => handlers::devices::execute(&ctx, json),
        Commands::Check => handlers::check::execute(&ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cli_err = err.downcast_ref::<CliError>();
            if !cli_err.is_some_and(CliError::already_reported) {
                eprintln!("Error: {err:#}");
            }
            ExitCode::from(cli_err.map_or(1, CliError::exit_code))
        }
    }
}
