//! Argument-vector command lines.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A program plus its arguments, passed to the OS as an argument vector.
///
/// Nothing here goes through a shell, so device paths containing spaces,
/// quotes or other metacharacters reach the helper untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl CommandInvocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// `<tool> --device=<device> <mode>`.
    pub fn device_query(tool: &Path, device: &Path, mode: &str) -> Self {
        let mut device_arg = OsString::from("--device=");
        device_arg.push(device.as_os_str());
        Self::new(tool).arg(device_arg).arg(mode)
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    /// Build the `std::process::Command` for this invocation (stdio left at defaults).
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Shell-like rendering for diagnostics only; never executed.
impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, self.program.as_os_str(), true)?;
        for arg in &self.args {
            f.write_str(" ")?;
            write_quoted(f, arg, false)?;
        }
        Ok(())
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &OsStr, always: bool) -> fmt::Result {
    let text = value.to_string_lossy();
    let needs_quotes = always
        || text.is_empty()
        || text
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\' | '$' | '`'));

    if !needs_quotes {
        return f.write_str(&text);
    }

    f.write_str("\"")?;
    for c in text.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}
