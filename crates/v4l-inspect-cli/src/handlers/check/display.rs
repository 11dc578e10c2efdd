//! Display utilities for the system check output.

use std::io::{self, Write};
use std::path::Path;

use v4l_inspect_core::{Dependency, DependencyStatus};

/// Width of the `=` rules around the check banner.
pub const BANNER_WIDTH: usize = 72;

pub fn write_banner(out: &mut dyn Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

/// Numbered section header, preceded by a blank line.
pub fn write_step(out: &mut dyn Write, step: u8, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[{step}] {title}")
}

/// Print a single tool row: `name : OK (path)` or `name : MISSING`.
pub fn write_dependency(out: &mut dyn Write, dep: &Dependency) -> io::Result<()> {
    match &dep.status {
        DependencyStatus::Present { path } => {
            writeln!(out, "{:16}: OK ({})", dep.name, path.display())
        }
        DependencyStatus::Missing => writeln!(out, "{:16}: MISSING", dep.name),
    }
}

pub fn write_device_list(
    out: &mut dyn Write,
    pattern: &str,
    devices: &[impl AsRef<Path>],
) -> io::Result<()> {
    if devices.is_empty() {
        return writeln!(out, "No {pattern} nodes found.");
    }
    for device in devices {
        writeln!(out, "- {}", device.as_ref().display())?;
    }
    Ok(())
}

pub fn write_summary(out: &mut dyn Write, missing: &[&Dependency]) -> io::Result<()> {
    if missing.is_empty() {
        return writeln!(out, "All checked tools are present.");
    }
    writeln!(out, "Some tools are missing; install them to match the expected setup:")?;
    for dep in missing {
        writeln!(out, "- {}", dep.name)?;
    }
    Ok(())
}

pub fn write_closing_note(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Note: This check performs only read-only inspection; it does not")?;
    writeln!(out, "capture images or modify device configuration.")
}
