//! Inspection settings.

use std::path::{Path, PathBuf};

use crate::devices::device_pattern;

/// Helper tool queried for every device.
pub const DEFAULT_TOOL: &str = "v4l2-ctl";
/// Directory holding the device nodes.
pub const DEFAULT_DEVICE_DIR: &str = "/dev";
/// File name prefix of video capture nodes.
pub const DEFAULT_DEVICE_PREFIX: &str = "video";
/// Environment variable listing executable directories.
pub const DEFAULT_SEARCH_VAR: &str = "PATH";

/// Where to look for devices and which helper to run against them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    /// Helper executable name, resolved through `search_var`.
    pub tool: String,
    /// Directory scanned for device nodes.
    pub device_dir: PathBuf,
    /// Device node name prefix (`<device_dir>/<device_prefix>*`).
    pub device_prefix: String,
    /// Name of the search path environment variable.
    pub search_var: String,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            device_dir: PathBuf::from(DEFAULT_DEVICE_DIR),
            device_prefix: DEFAULT_DEVICE_PREFIX.to_string(),
            search_var: DEFAULT_SEARCH_VAR.to_string(),
        }
    }
}

impl InspectConfig {
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    #[must_use]
    pub fn with_device_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.device_dir = dir.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_device_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.device_prefix = prefix.into();
        self
    }

    /// Glob text shown to users, e.g. `/dev/video*`.
    pub fn pattern(&self) -> String {
        device_pattern(&self.device_dir, &self.device_prefix)
    }
}
