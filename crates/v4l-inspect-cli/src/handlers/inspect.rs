//! Inspection run handler.

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;
use v4l_inspect_core::probe::camera_tools;
use v4l_inspect_core::{Dependency, InspectError, InspectOutcome, Inspector};

use super::check::instructions::{Palette, write_installation_instructions};
use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Package that ships the helper on Debian-family systems.
const HELPER_PACKAGE: &str = "v4l-utils";

/// Execute the inspection run.
///
/// Exits non-zero only when the helper cannot be found or our own output
/// breaks; helper failures on individual devices are reported inline.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let config = &ctx.config.inspect;
    let inspector = Inspector::new(config, &ctx.runner);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    match inspector.run(&mut out, &mut err) {
        Ok(outcome) => {
            log_outcome(&outcome);
            Ok(())
        }
        Err(InspectError::ToolNotFound { tool, source }) => {
            debug!(error = %source, "helper lookup failed");
            write_tool_not_found(&mut err, Palette::for_stream(&stderr), &tool)?;
            Err(CliError::ToolNotFound(tool).into())
        }
        Err(e) => Err(CliError::from(e).into()),
    }
}

fn log_outcome(outcome: &InspectOutcome) {
    match outcome {
        InspectOutcome::NoDevices => debug!("no device nodes matched"),
        InspectOutcome::NoCharacterDevices { candidates } => {
            debug!(candidates, "matches were not character devices");
        }
        InspectOutcome::Inspected(summary) => debug!(
            devices = summary.devices.len(),
            run_failures = summary.run_failures,
            helper_failures = summary.helper_failures,
            "inspection complete"
        ),
    }
}

/// Guidance for a missing helper, followed by distro-specific commands.
fn write_tool_not_found(err: &mut dyn Write, palette: Palette, tool: &str) -> io::Result<()> {
    writeln!(err, "ERROR: `{tool}` not found in PATH.")?;
    writeln!(
        err,
        "Install `{HELPER_PACKAGE}` (e.g. `sudo apt-get install {HELPER_PACKAGE}`) \
         to use this inspection tool."
    )?;

    let helper: Vec<Dependency> = camera_tools(tool).into_iter().filter(|d| d.required).collect();
    let missing: Vec<&Dependency> = helper.iter().collect();
    write_installation_instructions(err, palette, &missing)?;
    err.flush()
}
