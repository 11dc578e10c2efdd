//! Inspection run orchestration.
//!
//! Resolve the helper once, enumerate devices once, then for each device
//! print a banner and relay the helper's `--all` and `--list-formats-ext`
//! reports. A helper that fails for one device never stops the run; only a
//! missing helper does.

mod report;

pub use report::{DEVICE_QUERIES, HelperQuery, RULE_WIDTH};

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::InspectConfig;
use crate::devices::{DeviceFs, Enumeration, SystemDeviceFs, enumerate_devices_with};
use crate::error::InspectError;
use crate::resolver::{EnvProvider, FsProvider, SystemEnv, SystemFs, resolve_executable_with_deps};
use crate::runner::{CommandInvocation, CommandRunner, RunError};

/// How a run ended. Every variant is a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectOutcome {
    /// The pattern matched nothing.
    NoDevices,
    /// The pattern matched, but no match is a character device.
    NoCharacterDevices { candidates: usize },
    /// At least one device was inspected.
    Inspected(InspectSummary),
}

/// Counters for a run that reached the per-device stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectSummary {
    /// Devices that got a banner, in order.
    pub devices: Vec<PathBuf>,
    /// Helper invocations that could not be launched or reaped.
    pub run_failures: usize,
    /// Helper invocations that ran but exited non-zero.
    pub helper_failures: usize,
}

/// Drives one inspection run against injected OS boundaries.
pub struct Inspector<'a> {
    config: &'a InspectConfig,
    runner: &'a dyn CommandRunner,
    env: &'a dyn EnvProvider,
    fs: &'a dyn FsProvider,
    devices: &'a dyn DeviceFs,
}

impl<'a> Inspector<'a> {
    /// Inspector over the real environment, filesystem and `runner`.
    pub fn new(config: &'a InspectConfig, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            runner,
            env: &SystemEnv,
            fs: &SystemFs,
            devices: &SystemDeviceFs,
        }
    }

    #[must_use]
    pub fn with_env(mut self, env: &'a dyn EnvProvider) -> Self {
        self.env = env;
        self
    }

    #[must_use]
    pub fn with_fs(mut self, fs: &'a dyn FsProvider) -> Self {
        self.fs = fs;
        self
    }

    #[must_use]
    pub fn with_device_fs(mut self, devices: &'a dyn DeviceFs) -> Self {
        self.devices = devices;
        self
    }

    /// Locate the helper on the search path.
    pub fn resolve_tool(&self) -> Result<PathBuf, InspectError> {
        resolve_executable_with_deps(&self.config.tool, &self.config.search_var, self.env, self.fs)
            .map(|resolved| resolved.resolved_path)
            .map_err(|source| InspectError::ToolNotFound {
                tool: self.config.tool.clone(),
                source,
            })
    }

    /// One discovery pass over the configured device directory.
    pub fn enumerate(&self) -> Enumeration {
        enumerate_devices_with(&self.config.device_dir, &self.config.device_prefix, self.devices)
    }

    /// Full run: intro, discovery list, then one section per device.
    ///
    /// The report goes to `out`; helper launch/close failures go to `err`.
    pub fn run(
        &self,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<InspectOutcome, InspectError> {
        let tool = self.resolve_tool()?;
        info!(tool = %tool.display(), "using helper");

        report::write_intro(out, self.config)?;

        let found = self.enumerate();
        if found.is_empty() {
            report::write_no_devices(out, self.config)?;
            out.flush()?;
            return Ok(InspectOutcome::NoDevices);
        }

        report::write_discovered(out, found.devices.as_slice())?;

        if found.devices.is_empty() {
            report::write_no_char_devices(out, self.config)?;
            out.flush()?;
            return Ok(InspectOutcome::NoCharacterDevices {
                candidates: found.candidates.len(),
            });
        }

        let mut summary = InspectSummary::default();
        for device in &found.devices {
            self.inspect_device(&tool, device, out, err, &mut summary)?;
            summary.devices.push(device.clone());
        }

        debug!(
            devices = summary.devices.len(),
            run_failures = summary.run_failures,
            helper_failures = summary.helper_failures,
            "inspection finished"
        );
        Ok(InspectOutcome::Inspected(summary))
    }

    /// Banner plus one relayed section per helper query for `device`.
    fn inspect_device(
        &self,
        tool: &Path,
        device: &Path,
        out: &mut dyn Write,
        err: &mut dyn Write,
        summary: &mut InspectSummary,
    ) -> Result<(), InspectError> {
        report::write_banner(out, device)?;

        for query in &DEVICE_QUERIES {
            report::write_heading(out, &self.config.tool, query)?;
            out.flush()?;

            let invocation = CommandInvocation::device_query(tool, device, query.flag);
            match self.runner.relay(&invocation, out) {
                Ok(relayed) if relayed.succeeded() => {}
                Ok(relayed) => {
                    debug!(
                        device = %device.display(),
                        exit_code = ?relayed.exit_code,
                        "helper reported failure"
                    );
                    summary.helper_failures += 1;
                }
                Err(RunError::Sink { source }) => return Err(InspectError::Output(source)),
                Err(e) => {
                    warn!(device = %device.display(), error = %e, "helper invocation failed");
                    out.flush()?;
                    writeln!(err, "{e}")?;
                    summary.run_failures += 1;
                }
            }

            writeln!(out)?;
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::MockDeviceFs;
    use crate::resolver::{MockEnv, MockFs};
    use crate::runner::{RelaySummary, SystemRunner};
    use std::cell::RefCell;
    use std::io;

    /// Replays canned stdout and records every invocation.
    #[derive(Default)]
    struct ScriptedRunner {
        output: &'static str,
        exit_code: i32,
        fail_launch: bool,
        calls: RefCell<Vec<CommandInvocation>>,
    }

    impl CommandRunner for ScriptedRunner {
        fn relay(
            &self,
            invocation: &CommandInvocation,
            sink: &mut dyn Write,
        ) -> Result<RelaySummary, RunError> {
            self.calls.borrow_mut().push(invocation.clone());
            if self.fail_launch {
                return Err(RunError::Launch {
                    command: invocation.to_string(),
                    source: io::Error::from(io::ErrorKind::NotFound),
                });
            }
            if self.output.is_empty() {
                writeln!(sink, "(no output)").map_err(|source| RunError::Sink { source })?;
            } else {
                sink.write_all(self.output.as_bytes())
                    .map_err(|source| RunError::Sink { source })?;
            }
            Ok(RelaySummary {
                lines: self.output.lines().count(),
                exit_code: Some(self.exit_code),
            })
        }
    }

    fn env() -> MockEnv {
        MockEnv::new().with_var("PATH", "/usr/bin")
    }

    fn tool_fs() -> MockFs {
        MockFs::new().with_executable("/usr/bin/v4l2-ctl")
    }

    fn run(
        runner: &dyn CommandRunner,
        env: &MockEnv,
        fs: &MockFs,
        devices: &MockDeviceFs,
    ) -> (Result<InspectOutcome, InspectError>, String, String) {
        let config = InspectConfig::default();
        let inspector = Inspector::new(&config, runner)
            .with_env(env)
            .with_fs(fs)
            .with_device_fs(devices);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = inspector.run(&mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn missing_tool_stops_before_any_output() {
        let runner = ScriptedRunner::default();
        let devices = MockDeviceFs::new().with_char_device("/dev/video0");

        let (result, out, _) = run(&runner, &env(), &MockFs::new(), &devices);

        assert!(result.unwrap_err().is_tool_not_found());
        assert!(out.is_empty());
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn no_matches_reports_no_devices() {
        let runner = ScriptedRunner::default();

        let (result, out, _) = run(&runner, &env(), &tool_fs(), &MockDeviceFs::new());

        assert_eq!(result.unwrap(), InspectOutcome::NoDevices);
        assert!(
            out.contains("No /dev/video* devices found. Is a camera connected and recognized?")
        );
        assert!(!out.contains("DEVICE:"));
        assert!(!out.contains("Discovered video devices:"));
    }

    #[test]
    fn regular_files_report_no_char_devices() {
        let runner = ScriptedRunner::default();
        let devices = MockDeviceFs::new().with_file("/dev/video0");

        let (result, out, _) = run(&runner, &env(), &tool_fs(), &devices);

        assert_eq!(
            result.unwrap(),
            InspectOutcome::NoCharacterDevices { candidates: 1 }
        );
        let expected =
            "Discovered video devices:\n\nNo character-device /dev/video* nodes found.\n";
        assert!(out.contains(expected));
        assert!(!out.contains("  - /dev/video0"));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn single_device_gets_one_banner_and_two_sections() {
        let runner = ScriptedRunner {
            output: "Driver name : uvcvideo\n",
            ..ScriptedRunner::default()
        };
        let devices = MockDeviceFs::new().with_char_device("/dev/video0");

        let (result, out, err) = run(&runner, &env(), &tool_fs(), &devices);

        let InspectOutcome::Inspected(summary) = result.unwrap() else {
            panic!("expected an inspected run");
        };
        assert_eq!(summary.devices, vec![PathBuf::from("/dev/video0")]);
        assert_eq!(out.matches("DEVICE: ").count(), 1);
        assert_eq!(out.matches(">>> ").count(), 2);
        let rule = "=".repeat(RULE_WIDTH);
        let expected = format!(
            "{rule}\nDEVICE: /dev/video0\n{rule}\n\n\
             >>> BASIC INFORMATION AND CAPABILITIES (v4l2-ctl --all)\nDriver name : uvcvideo\n\n\
             >>> SUPPORTED FORMATS AND RESOLUTIONS (v4l2-ctl --list-formats-ext)\n\
             Driver name : uvcvideo\n\n"
        );
        assert!(out.ends_with(&expected));
        assert!(err.is_empty());

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].program(), Path::new("/usr/bin/v4l2-ctl"));
        assert_eq!(calls[0].arguments()[0], "--device=/dev/video0");
        assert_eq!(calls[0].arguments()[1], "--all");
        assert_eq!(calls[1].arguments()[1], "--list-formats-ext");
    }

    #[test]
    fn devices_are_inspected_in_enumeration_order() {
        let runner = ScriptedRunner::default();
        let devices = MockDeviceFs::new()
            .with_char_device("/dev/video2")
            .with_file("/dev/video-meta")
            .with_char_device("/dev/video0")
            .with_char_device("/dev/video1");

        let (result, out, _) = run(&runner, &env(), &tool_fs(), &devices);

        let InspectOutcome::Inspected(summary) = result.unwrap() else {
            panic!("expected an inspected run");
        };
        assert_eq!(summary.devices.len(), 3);
        let banners: Vec<&str> = out
            .lines()
            .filter_map(|l| l.strip_prefix("DEVICE: "))
            .collect();
        assert_eq!(banners, vec!["/dev/video2", "/dev/video0", "/dev/video1"]);
        assert_eq!(runner.calls.borrow().len(), 6);
    }

    #[test]
    fn silent_helper_leaves_only_placeholder() {
        let runner = ScriptedRunner::default();
        let devices = MockDeviceFs::new().with_char_device("/dev/video0");

        let (_, out, _) = run(&runner, &env(), &tool_fs(), &devices);

        assert!(out.contains("(v4l2-ctl --all)\n(no output)\n\n>>> "));
        assert!(out.ends_with("(v4l2-ctl --list-formats-ext)\n(no output)\n\n"));
    }

    #[test]
    fn launch_failures_are_reported_and_skipped() {
        let runner = ScriptedRunner {
            fail_launch: true,
            ..ScriptedRunner::default()
        };
        let devices = MockDeviceFs::new()
            .with_char_device("/dev/video0")
            .with_char_device("/dev/video1");

        let (result, out, err) = run(&runner, &env(), &tool_fs(), &devices);

        let InspectOutcome::Inspected(summary) = result.unwrap() else {
            panic!("expected an inspected run");
        };
        assert_eq!(summary.devices.len(), 2);
        assert_eq!(summary.run_failures, 4);
        assert_eq!(out.matches("DEVICE: ").count(), 2);
        assert_eq!(err.matches("Failed to run command: ").count(), 4);
        assert!(err.contains("--device=/dev/video1"));
    }

    #[test]
    fn helper_exit_status_is_counted_not_printed() {
        let runner = ScriptedRunner {
            output: "Cannot open device /dev/video0\n",
            exit_code: 1,
            ..ScriptedRunner::default()
        };
        let devices = MockDeviceFs::new().with_char_device("/dev/video0");

        let (result, _, err) = run(&runner, &env(), &tool_fs(), &devices);

        let InspectOutcome::Inspected(summary) = result.unwrap() else {
            panic!("expected an inspected run");
        };
        assert_eq!(summary.helper_failures, 2);
        assert_eq!(summary.run_failures, 0);
        assert!(err.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unlaunchable_helper_with_real_runner_keeps_going() {
        // Resolution says yes, but nothing exists at that path
        let fs = MockFs::new().with_executable("/nonexistent-bin/v4l2-ctl");
        let env = MockEnv::new().with_var("PATH", "/nonexistent-bin");
        let devices = MockDeviceFs::new()
            .with_char_device("/dev/video0")
            .with_char_device("/dev/video1");

        let (result, out, err) = run(&SystemRunner, &env, &fs, &devices);

        let InspectOutcome::Inspected(summary) = result.unwrap() else {
            panic!("expected an inspected run");
        };
        assert_eq!(summary.run_failures, 4);
        assert_eq!(out.matches("DEVICE: ").count(), 2);
        assert!(err.contains("\"/nonexistent-bin/v4l2-ctl\" --device=/dev/video0 --all"));
    }
}
