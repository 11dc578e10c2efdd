//! Platform detection utilities.

use std::path::Path;

const OS_RELEASE: &str = "/etc/os-release";

/// Linux distribution detection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinuxDistro {
    Debian,
    Fedora,
    Arch,
    Suse,
    Unknown,
}

impl LinuxDistro {
    /// Human-readable family name used in headers.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Debian => "Debian/Ubuntu/Raspberry Pi OS",
            Self::Fedora => "Fedora/RHEL",
            Self::Arch => "Arch Linux",
            Self::Suse => "openSUSE",
            Self::Unknown => "Linux",
        }
    }
}

/// Detect the Linux distribution family from `/etc/os-release`.
pub fn detect_linux_distro() -> LinuxDistro {
    detect_linux_distro_from(Path::new(OS_RELEASE))
}

fn detect_linux_distro_from(path: &Path) -> LinuxDistro {
    std::fs::read_to_string(path).map_or(LinuxDistro::Unknown, |content| {
        distro_from_os_release(&content)
    })
}

/// Classify the contents of an os-release file.
pub fn distro_from_os_release(content: &str) -> LinuxDistro {
    let content_lower = content.to_lowercase();

    if content_lower.contains("debian")
        || content_lower.contains("ubuntu")
        || content_lower.contains("raspbian")
        || content_lower.contains("pop!_os")
        || content_lower.contains("mint")
    {
        LinuxDistro::Debian
    } else if content_lower.contains("fedora")
        || content_lower.contains("rhel")
        || content_lower.contains("centos")
        || content_lower.contains("rocky")
        || content_lower.contains("alma")
    {
        LinuxDistro::Fedora
    } else if content_lower.contains("arch") || content_lower.contains("manjaro") {
        LinuxDistro::Arch
    } else if content_lower.contains("suse") {
        LinuxDistro::Suse
    } else {
        LinuxDistro::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raspberry_pi_os_is_debian_family() {
        let content =
            "PRETTY_NAME=\"Raspbian GNU/Linux 12 (bookworm)\"\nID=raspbian\nID_LIKE=debian\n";
        assert_eq!(distro_from_os_release(content), LinuxDistro::Debian);
    }

    #[test]
    fn fedora_and_arch_are_detected() {
        assert_eq!(distro_from_os_release("ID=fedora\n"), LinuxDistro::Fedora);
        assert_eq!(distro_from_os_release("ID=arch\n"), LinuxDistro::Arch);
        assert_eq!(
            distro_from_os_release("ID=\"opensuse-tumbleweed\"\n"),
            LinuxDistro::Suse
        );
    }

    #[test]
    fn missing_os_release_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            detect_linux_distro_from(&dir.path().join("os-release")),
            LinuxDistro::Unknown
        );
    }
}
