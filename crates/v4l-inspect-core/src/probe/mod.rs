//! Search-path probing for the tools a camera setup relies on.
//!
//! Uses the same resolution rules as the helper lookup, so "OK" here means
//! the inspection run would find the tool too.

mod types;

pub use types::{Dependency, DependencyStatus};

use tracing::debug;

use crate::resolver::{EnvProvider, FsProvider, SystemEnv, SystemFs, resolve_executable_with_deps};

/// The tools checked by the system sanity check, with `helper` as the only required one.
pub fn camera_tools(helper: &str) -> Vec<Dependency> {
    vec![
        Dependency::optional("lsusb", "Lists USB devices (is the camera enumerated?)")
            .with_package("usbutils"),
        Dependency::required(helper, "Queries V4L2 device capabilities and formats")
            .with_package("v4l-utils"),
        Dependency::optional("libcamera-still", "Still capture on libcamera platforms")
            .with_package("libcamera-apps"),
        Dependency::optional("libcamera-jpeg", "JPEG capture on libcamera platforms")
            .with_package("libcamera-apps"),
    ]
}

/// Resolves dependencies against a search path variable.
pub struct ToolProbe<'a> {
    search_var: &'a str,
    env: &'a dyn EnvProvider,
    fs: &'a dyn FsProvider,
}

impl<'a> ToolProbe<'a> {
    pub fn new(search_var: &'a str) -> Self {
        Self {
            search_var,
            env: &SystemEnv,
            fs: &SystemFs,
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

    /// Fill in the status of one dependency.
    pub fn probe(&self, dep: Dependency) -> Dependency {
        let resolved = resolve_executable_with_deps(&dep.name, self.search_var, self.env, self.fs);
        let status = match resolved {
            Ok(resolved) => DependencyStatus::Present {
                path: resolved.resolved_path,
            },
            Err(e) => {
                debug!(tool = %dep.name, error = %e, "tool not resolved");
                DependencyStatus::Missing
            }
        };
        dep.with_status(status)
    }

    /// Probe every dependency, keeping order.
    pub fn check_all(&self, deps: Vec<Dependency>) -> Vec<Dependency> {
        deps.into_iter().map(|dep| self.probe(dep)).collect()
    }
}
