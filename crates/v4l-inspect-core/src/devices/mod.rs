//! Video device node discovery.
//!
//! Expands `<dir>/<prefix>*` (by default `/dev/video*`) and keeps the matches
//! that are character-special files. Entries whose status cannot be read are
//! silently left out; an empty result is a normal outcome, not an error.

mod enumerate;
mod fs;

pub use enumerate::{Enumeration, device_pattern, enumerate_devices, enumerate_devices_with};
pub use fs::{DeviceFs, SystemDeviceFs};

#[cfg(test)]
pub use fs::MockDeviceFs;
