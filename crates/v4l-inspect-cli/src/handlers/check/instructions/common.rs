//! Common utilities for installation instructions.

use std::io::{self, IsTerminal, Write};

// ANSI color codes
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// ANSI styling, switched off when the target stream is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colors only if `stream` is attached to a terminal.
    pub fn for_stream(stream: &impl IsTerminal) -> Self {
        Self {
            enabled: stream.is_terminal(),
        }
    }

    /// No escape codes at all.
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    pub const fn blue(self) -> &'static str {
        if self.enabled { BLUE } else { "" }
    }

    pub const fn bold(self) -> &'static str {
        if self.enabled { BOLD } else { "" }
    }

    pub const fn reset(self) -> &'static str {
        if self.enabled { RESET } else { "" }
    }
}

/// Print a section header for installation instructions.
pub fn write_header(out: &mut dyn Write, palette: Palette, title: &str) -> io::Result<()> {
    let (bold, blue, reset) = (palette.bold(), palette.blue(), palette.reset());
    writeln!(out, "\n{bold}{blue}Installation Instructions ({title}):{reset}")?;
    writeln!(out, "{}", "=".repeat(60))
}

/// Print a command with proper formatting.
pub fn write_command(out: &mut dyn Write, palette: Palette, cmd: &str) -> io::Result<()> {
    writeln!(out, "  {}$ {cmd}{}", palette.blue(), palette.reset())
}

/// Print a subsection header.
pub fn write_subsection(out: &mut dyn Write, palette: Palette, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}{title}:{}", palette.bold(), palette.reset())
}
