//! `std::process` backed runner.

use super::invocation::CommandInvocation;
use super::lines::LineReader;
use super::{CommandRunner, NO_OUTPUT_PLACEHOLDER, RelaySummary, RunError};
use std::io::{BufReader, Read, Write};
use std::process::Stdio;
use tracing::{debug, warn};

/// Runs helpers as child processes and relays their stdout line by line.
///
/// The child's stderr is inherited, so helper error text reaches the terminal
/// directly. Calls block until the child's stdout closes and it has exited.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn relay(
        &self,
        invocation: &CommandInvocation,
        sink: &mut dyn Write,
    ) -> Result<RelaySummary, RunError> {
        debug!(command = %invocation, "launching helper");

        let mut child = invocation
            .to_command()
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| RunError::Launch {
                command: invocation.to_string(),
                source,
            })?;

        // The pipe is dropped before wait() so a child still writing gets EPIPE
        // instead of blocking forever when relaying stopped early.
        let relayed = match child.stdout.take() {
            Some(stdout) => relay_lines(stdout, sink),
            None => Ok(0),
        };

        let status = child.wait().map_err(|source| RunError::Close { source });

        let lines = relayed?;
        let status = status?;
        if !status.success() {
            warn!(command = %invocation, %status, "helper exited unsuccessfully");
        }

        Ok(RelaySummary {
            lines,
            exit_code: status.code(),
        })
    }
}

/// Forward every line of `source` to `sink`; print the placeholder when there were none.
///
/// An unterminated final line gets a newline so the report framing stays intact.
fn relay_lines(source: impl Read, sink: &mut dyn Write) -> Result<usize, RunError> {
    let mut count = 0;

    for line in LineReader::new(BufReader::new(source)) {
        let line = line.map_err(|source| RunError::Read { source })?;
        sink.write_all(line.as_bytes())
            .map_err(|source| RunError::Sink { source })?;
        if !line.is_terminated() {
            sink.write_all(b"\n").map_err(|source| RunError::Sink { source })?;
        }
        count += 1;
    }

    if count == 0 {
        writeln!(sink, "{NO_OUTPUT_PLACEHOLDER}").map_err(|source| RunError::Sink { source })?;
    }
    sink.flush().map_err(|source| RunError::Sink { source })?;

    Ok(count)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandInvocation {
        CommandInvocation::new("/bin/sh").arg("-c").arg(script)
    }

    #[test]
    fn relays_stdout_verbatim() {
        let mut out = Vec::new();

        let summary = SystemRunner
            .relay(&sh("printf 'Driver Info:\\n\\tCard type : Cam\\n'"), &mut out)
            .unwrap();

        assert_eq!(out, b"Driver Info:\n\tCard type : Cam\n");
        assert_eq!(summary.lines, 2);
        assert!(summary.succeeded());
    }

    #[test]
    fn unterminated_last_line_gets_a_newline() {
        let mut out = Vec::new();

        let summary = SystemRunner.relay(&sh("printf 'a\\nb'"), &mut out).unwrap();

        assert_eq!(out, b"a\nb\n");
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn silent_command_prints_placeholder() {
        let mut out = Vec::new();

        let summary = SystemRunner.relay(&sh("true"), &mut out).unwrap();

        assert_eq!(out, b"(no output)\n");
        assert_eq!(summary.lines, 0);
    }

    #[test]
    fn stderr_is_not_captured() {
        let mut out = Vec::new();

        let summary = SystemRunner
            .relay(&sh("echo oops >&2"), &mut out)
            .unwrap();

        assert_eq!(out, b"(no output)\n");
        assert_eq!(summary.lines, 0);
    }

    #[test]
    fn nonzero_exit_is_reported_not_raised() {
        let mut out = Vec::new();

        let summary = SystemRunner
            .relay(&sh("echo partial; exit 3"), &mut out)
            .unwrap();

        assert_eq!(out, b"partial\n");
        assert_eq!(summary.exit_code, Some(3));
        assert!(!summary.succeeded());
    }

    #[test]
    fn missing_program_is_a_launch_failure() {
        let mut out = Vec::new();
        let inv = CommandInvocation::new("/definitely/not/here/v4l2-ctl").arg("--all");

        let err = SystemRunner.relay(&inv, &mut out).unwrap_err();

        match err {
            RunError::Launch { command, .. } => {
                assert!(command.contains("/definitely/not/here/v4l2-ctl"));
            }
            other => panic!("expected launch failure, got {other:?}"),
        }
        assert!(out.is_empty());
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_failure_still_reaps_child() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("exited");
        let script = format!("yes v4l2 | head -n 100000; touch '{}'", marker.display());

        let err = SystemRunner.relay(&sh(&script), &mut BrokenSink).unwrap_err();

        assert!(matches!(err, RunError::Sink { .. }));
        assert!(marker.exists(), "relay returned before the helper exited");
    }

    /// Yields one line, then fails like a device disappearing mid-read.
    struct OneLineThenFail {
        sent: bool,
    }

    impl Read for OneLineThenFail {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.sent {
                return Err(std::io::Error::other("device went away"));
            }
            self.sent = true;
            let line = b"line\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn read_error_stops_relay_without_placeholder() {
        let mut out = Vec::new();

        let err = relay_lines(OneLineThenFail { sent: false }, &mut out).unwrap_err();

        assert!(matches!(err, RunError::Read { .. }));
        assert_eq!(out, b"line\n");
    }
}
