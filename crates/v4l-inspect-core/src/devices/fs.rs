//! Filesystem access for device discovery (injectable for testing).

use std::io;
use std::path::{Path, PathBuf};

/// Trait for the directory listing and metadata queries device discovery needs.
pub trait DeviceFs {
    /// List the entries of `dir` in the order the directory yields them.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Whether `path` (following symlinks) is a character-special device.
    ///
    /// A failed status query answers `false`.
    fn is_char_device(&self, path: &Path) -> bool;
}

/// Production provider backed by `std::fs`.
pub struct SystemDeviceFs;

impl DeviceFs for SystemDeviceFs {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        // Entries that vanish or error mid-listing are dropped, like glob(3) does
        Ok(std::fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .collect())
    }

    #[cfg(unix)]
    fn is_char_device(&self, path: &Path) -> bool {
        use std::os::unix::fs::FileTypeExt;
        std::fs::metadata(path).is_ok_and(|m| m.file_type().is_char_device())
    }

    #[cfg(not(unix))]
    fn is_char_device(&self, _path: &Path) -> bool {
        false
    }
}

/// Test/mock provider with a fixed listing.
#[cfg(test)]
#[derive(Default)]
pub struct MockDeviceFs {
    entries: Vec<PathBuf>,
    char_devices: std::collections::HashSet<PathBuf>,
    unreadable: bool,
}

#[cfg(test)]
impl MockDeviceFs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_char_device(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.char_devices.insert(path.clone());
        self.entries.push(path);
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.push(path.into());
        self
    }

    #[must_use]
    pub fn unreadable(mut self) -> Self {
        self.unreadable = true;
        self
    }
}

#[cfg(test)]
impl DeviceFs for MockDeviceFs {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        if self.unreadable {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(self
            .entries
            .iter()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn is_char_device(&self, path: &Path) -> bool {
        self.char_devices.contains(path)
    }
}
