//! `<dir>/<prefix>*` expansion and character-device filtering.

use super::fs::{DeviceFs, SystemDeviceFs};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of one discovery pass.
///
/// `candidates` holds every pattern match; `devices` the subset that are
/// character-special nodes. Both keep directory order, which is
/// filesystem-dependent and not guaranteed stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    /// Pattern text, e.g. `/dev/video*`.
    pub pattern: String,
    /// Raw pattern matches.
    pub candidates: Vec<PathBuf>,
    /// Matches that passed the character-device check.
    pub devices: Vec<PathBuf>,
}

impl Enumeration {
    /// Nothing matched the pattern at all.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Something matched, but none of it is a character device.
    pub fn has_only_non_devices(&self) -> bool {
        !self.candidates.is_empty() && self.devices.is_empty()
    }
}

/// Render the glob text for `dir` and `prefix`.
pub fn device_pattern(dir: &Path, prefix: &str) -> String {
    format!("{}*", dir.join(prefix).display())
}

/// Enumerate character devices under `dir` whose name starts with `prefix`.
pub fn enumerate_devices(dir: &Path, prefix: &str) -> Enumeration {
    enumerate_devices_with(dir, prefix, &SystemDeviceFs)
}

/// Enumerate with an injected filesystem (for testing).
///
/// An unreadable directory yields no candidates, the same as an empty one.
pub fn enumerate_devices_with(dir: &Path, prefix: &str, fs: &dyn DeviceFs) -> Enumeration {
    let pattern = device_pattern(dir, prefix);

    let entries = match fs.list_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(%pattern, error = %e, "device directory unreadable; treating as no matches");
            Vec::new()
        }
    };

    let candidates: Vec<PathBuf> = entries
        .into_iter()
        .filter(|path| matches_prefix(path, prefix))
        .collect();

    let devices: Vec<PathBuf> = candidates
        .iter()
        .filter(|path| {
            let keep = fs.is_char_device(path);
            if !keep {
                debug!(path = %path.display(), "skipping match that is not a character device");
            }
            keep
        })
        .cloned()
        .collect();

    debug!(
        %pattern,
        candidates = candidates.len(),
        devices = devices.len(),
        "device enumeration done"
    );

    Enumeration {
        pattern,
        candidates,
        devices,
    }
}

/// Glob-style `<prefix>*` match on the file name; `*` never matches a leading dot.
fn matches_prefix(path: &Path, prefix: &str) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();

    if name.first() == Some(&b'.') && !prefix.starts_with('.') {
        return false;
    }
    name.starts_with(prefix.as_bytes())
}
