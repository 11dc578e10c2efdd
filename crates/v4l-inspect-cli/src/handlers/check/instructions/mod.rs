//! Installation instructions for missing camera tools.
//!
//! Commands are chosen by the distribution family found in
//! `/etc/os-release`.

mod common;
mod linux;

use std::io::{self, Write};

use v4l_inspect_core::Dependency;

pub use common::Palette;

use super::platform::detect_linux_distro;

/// Print installation instructions for missing tools.
pub fn write_installation_instructions(
    out: &mut dyn Write,
    palette: Palette,
    missing: &[&Dependency],
) -> io::Result<()> {
    if missing.is_empty() {
        return Ok(());
    }
    linux::write_instructions(out, palette, missing, detect_linux_distro())
}
