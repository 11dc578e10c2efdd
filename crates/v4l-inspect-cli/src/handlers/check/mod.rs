//! System sanity check handler.
//!
//! Probes the camera tools on the search path, lists the video device
//! nodes, asks the helper for its own device listing and summarizes what
//! is missing. Everything here is read-only.

mod display;
pub mod instructions;
mod platform;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use v4l_inspect_core::devices::enumerate_devices;
use v4l_inspect_core::probe::camera_tools;
use v4l_inspect_core::{CommandInvocation, CommandRunner, Dependency, InspectConfig, ToolProbe};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use display::{
    write_banner, write_closing_note, write_dependency, write_device_list, write_step,
    write_summary,
};
use instructions::{Palette, write_installation_instructions};

const TITLE: &str = "Camera System Sanity Check";
const LIST_DEVICES_FLAG: &str = "--list-devices";

/// Execute the check command.
///
/// Returns an error if a required tool is missing.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let config = &ctx.config.inspect;
    let probe = ToolProbe::new(&config.search_var);
    let mut devices = enumerate_devices(&config.device_dir, &config.device_prefix).devices;
    devices.sort();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let palette = Palette::for_stream(&stdout);
    let tools = run_check(
        &mut stdout.lock(),
        &mut stderr.lock(),
        palette,
        config,
        &probe,
        &ctx.runner,
        &devices,
    )?;

    let missing_required: Vec<String> = tools
        .iter()
        .filter(|d| d.required && !d.is_present())
        .map(|d| d.name.clone())
        .collect();
    if missing_required.is_empty() {
        Ok(())
    } else {
        Err(CliError::MissingTools(missing_required).into())
    }
}

/// Render the check report and return the probed tools.
fn run_check(
    out: &mut dyn Write,
    err: &mut dyn Write,
    palette: Palette,
    config: &InspectConfig,
    probe: &ToolProbe<'_>,
    runner: &dyn CommandRunner,
    devices: &[PathBuf],
) -> Result<Vec<Dependency>, CliError> {
    write_banner(out, TITLE)?;

    write_step(out, 1, "Checking required tools in PATH")?;
    let tools = probe.check_all(camera_tools(&config.tool));
    for dep in &tools {
        write_dependency(out, dep)?;
    }

    write_step(out, 2, &format!("Listing {} devices", config.pattern()))?;
    write_device_list(out, &config.pattern(), devices)?;

    write_step(out, 3, &format!("V4L2 devices via `{} {LIST_DEVICES_FLAG}`", config.tool))?;
    let helper = tools.iter().find(|d| d.name == config.tool).and_then(Dependency::path);
    match helper {
        Some(path) => {
            out.flush()?;
            let invocation = CommandInvocation::new(path).arg(LIST_DEVICES_FLAG);
            list_helper_devices(out, err, runner, &invocation)?;
        }
        None => writeln!(out, "{} not available; skipping V4L2 device listing.", config.tool)?,
    }

    write_step(out, 4, "Summary")?;
    let missing: Vec<&Dependency> = tools.iter().filter(|d| !d.is_present()).collect();
    write_summary(out, &missing)?;
    write_installation_instructions(out, palette, &missing)?;

    write_closing_note(out)?;
    out.flush()?;
    Ok(tools)
}

/// Relay the helper's device listing; failures are reported on `err`.
fn list_helper_devices(
    out: &mut dyn Write,
    err: &mut dyn Write,
    runner: &dyn CommandRunner,
    invocation: &CommandInvocation,
) -> Result<(), CliError> {
    match runner.relay(invocation, out) {
        Ok(summary) => {
            if let Some(code) = summary.exit_code.filter(|&code| code != 0) {
                writeln!(err, "Command failed ({invocation}), exit code {code}")?;
            }
            Ok(())
        }
        Err(v4l_inspect_core::RunError::Sink { source }) => Err(source.into()),
        Err(e) => {
            writeln!(err, "{e}")?;
            Ok(())
        }
    }
}
