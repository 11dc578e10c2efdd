//! Device listing handler.

use std::io::{self, Write};

use anyhow::{Context, Result};
use v4l_inspect_core::{Enumeration, enumerate_devices};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// List matching device nodes without running the helper.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let config = &ctx.config.inspect;
    let found = enumerate_devices(&config.device_dir, &config.device_prefix);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &found).context("Failed to serialize device list")?;
        writeln!(out).map_err(CliError::from)?;
    } else {
        write_listing(&mut out, &found).map_err(CliError::from)?;
    }
    out.flush().map_err(CliError::from)?;
    Ok(())
}

fn write_listing(out: &mut dyn Write, found: &Enumeration) -> io::Result<()> {
    if found.is_empty() {
        return writeln!(out, "No {} devices found.", found.pattern);
    }
    if found.has_only_non_devices() {
        return writeln!(
            out,
            "No character-device {} nodes found ({} other matches).",
            found.pattern,
            found.candidates.len()
        );
    }
    for device in &found.devices {
        writeln!(out, "{}", device.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(found: &Enumeration) -> String {
        let mut buf = Vec::new();
        write_listing(&mut buf, found).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_one_device_per_line() {
        let found = Enumeration {
            pattern: "/dev/video*".into(),
            candidates: vec![PathBuf::from("/dev/video0"), PathBuf::from("/dev/video1")],
            devices: vec![PathBuf::from("/dev/video0"), PathBuf::from("/dev/video1")],
        };
        assert_eq!(render(&found), "/dev/video0\n/dev/video1\n");
    }

    #[test]
    fn reports_empty_and_non_device_matches() {
        let empty = Enumeration {
            pattern: "/dev/video*".into(),
            ..Enumeration::default()
        };
        assert_eq!(render(&empty), "No /dev/video* devices found.\n");

        let files = Enumeration {
            pattern: "/dev/video*".into(),
            candidates: vec![PathBuf::from("/dev/video-notes")],
            devices: Vec::new(),
        };
        assert_eq!(
            render(&files),
            "No character-device /dev/video* nodes found (1 other matches).\n"
        );
    }
}
