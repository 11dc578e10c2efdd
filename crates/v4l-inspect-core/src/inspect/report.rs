//! Fixed report text: intro, device banners and section headings.

use std::io::{self, Write};
use std::path::Path;

use crate::config::InspectConfig;

/// Width of the `=` rules around each device banner.
pub const RULE_WIDTH: usize = 80;

const TITLE: &str = "Camera / V4L2 Device Inspection";

/// A helper mode run once per device, with the heading shown above its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelperQuery {
    /// Mode flag passed after `--device=<path>`.
    pub flag: &'static str,
    /// Section title printed before the relayed output.
    pub title: &'static str,
}

/// Queries issued for every device, in order.
pub const DEVICE_QUERIES: [HelperQuery; 2] = [
    HelperQuery {
        flag: "--all",
        title: "BASIC INFORMATION AND CAPABILITIES",
    },
    HelperQuery {
        flag: "--list-formats-ext",
        title: "SUPPORTED FORMATS AND RESOLUTIONS",
    },
];

pub fn write_intro(out: &mut dyn Write, config: &InspectConfig) -> io::Result<()> {
    let pattern = config.pattern();
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "-".repeat(TITLE.len()))?;
    writeln!(out)?;
    writeln!(out, "Context:")?;
    writeln!(out, "- {pattern} nodes are exposed by the Linux kernel's V4L2 subsystem.")?;
    writeln!(out, "- Drivers (e.g. `uvcvideo` for USB cameras) register these devices.")?;
    writeln!(out, "- This program uses `{}` as a front-end to V4L2 ioctls to report", config.tool)?;
    writeln!(out, "  the driver- and hardware-exposed capabilities to userspace.")?;
    writeln!(out)
}

pub fn write_no_devices(out: &mut dyn Write, config: &InspectConfig) -> io::Result<()> {
    writeln!(out, "No {} devices found. Is a camera connected and recognized?", config.pattern())
}

pub fn write_discovered(out: &mut dyn Write, devices: &[impl AsRef<Path>]) -> io::Result<()> {
    writeln!(out, "Discovered video devices:")?;
    for device in devices {
        writeln!(out, "  - {}", device.as_ref().display())?;
    }
    writeln!(out)
}

pub fn write_no_char_devices(out: &mut dyn Write, config: &InspectConfig) -> io::Result<()> {
    writeln!(out, "No character-device {} nodes found.", config.pattern())
}

pub fn write_banner(out: &mut dyn Write, device: &Path) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "DEVICE: {}", device.display())?;
    writeln!(out, "{rule}")?;
    writeln!(out)
}

pub fn write_heading(out: &mut dyn Write, tool: &str, query: &HelperQuery) -> io::Result<()> {
    writeln!(out, ">>> {} ({tool} {})", query.title, query.flag)
}
