//! Tool dependency types.

use std::path::PathBuf;

/// Whether a tool was found on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Tool resolved to an executable.
    Present { path: PathBuf },
    /// Tool is not on the search path.
    Missing,
}

/// A command-line tool the camera setup relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Executable name (e.g., "v4l2-ctl", "lsusb").
    pub name: String,
    /// Current status of the dependency.
    pub status: DependencyStatus,
    /// Description of what this tool is used for.
    pub description: String,
    /// Whether the inspection cannot work without it.
    pub required: bool,
    /// Distribution package that usually ships the tool.
    pub package: Option<String>,
}

impl Dependency {
    /// Create a new required dependency.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
            description: description.into(),
            required: true,
            package: None,
        }
    }

    /// Create a new optional dependency.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }

    /// Set the package that provides this tool.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Set the status of this dependency.
    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = status;
        self
    }

    pub const fn is_present(&self) -> bool {
        matches!(self.status, DependencyStatus::Present { .. })
    }

    /// Resolved path, if present.
    pub fn path(&self) -> Option<&PathBuf> {
        match &self.status {
            DependencyStatus::Present { path } => Some(path),
            DependencyStatus::Missing => None,
        }
    }
}
