//! Linux installation instructions.

use std::io::{self, Write};

use v4l_inspect_core::Dependency;

use super::common::{Palette, write_command, write_header, write_subsection};
use crate::handlers::check::platform::LinuxDistro;

const LIBCAMERA_TOOLS: [&str; 2] = ["libcamera-still", "libcamera-jpeg"];

/// Print Linux-specific installation instructions.
pub fn write_instructions(
    out: &mut dyn Write,
    palette: Palette,
    missing: &[&Dependency],
    distro: LinuxDistro,
) -> io::Result<()> {
    write_header(out, palette, distro.display_name())?;

    let (manager, install, packages) = match distro {
        LinuxDistro::Debian => ("apt", "sudo apt install -y", packages(missing, apt_package)),
        LinuxDistro::Fedora => ("dnf", "sudo dnf install -y", packages(missing, dnf_package)),
        LinuxDistro::Arch => (
            "pacman",
            "sudo pacman -S --needed",
            packages(missing, pacman_package),
        ),
        LinuxDistro::Suse => (
            "zypper",
            "sudo zypper install -y",
            packages(missing, zypper_package),
        ),
        LinuxDistro::Unknown => return write_generic_instructions(out, palette, missing),
    };

    if !packages.is_empty() {
        write_subsection(out, palette, &format!("Install via {manager}"))?;
        if distro == LinuxDistro::Debian {
            write_command(out, palette, "sudo apt update")?;
        }
        write_command(out, palette, &format!("{install} {}", packages.join(" ")))?;
    }

    if distro != LinuxDistro::Debian {
        write_libcamera_note(out, palette, missing)?;
    }
    Ok(())
}

/// Map missing tools to unique package names, sorted.
fn packages(
    missing: &[&Dependency],
    map: fn(&str) -> Option<&'static str>,
) -> Vec<&'static str> {
    let mut unique: Vec<&str> = missing.iter().filter_map(|d| map(&d.name)).collect();
    unique.sort_unstable();
    unique.dedup();
    unique
}

fn apt_package(name: &str) -> Option<&'static str> {
    match name {
        "v4l2-ctl" => Some("v4l-utils"),
        "lsusb" => Some("usbutils"),
        "libcamera-still" | "libcamera-jpeg" => Some("libcamera-apps"),
        _ => None,
    }
}

fn dnf_package(name: &str) -> Option<&'static str> {
    match name {
        "v4l2-ctl" => Some("v4l-utils"),
        "lsusb" => Some("usbutils"),
        _ => None,
    }
}

fn pacman_package(name: &str) -> Option<&'static str> {
    match name {
        "v4l2-ctl" => Some("v4l-utils"),
        "lsusb" => Some("usbutils"),
        _ => None,
    }
}

fn zypper_package(name: &str) -> Option<&'static str> {
    match name {
        "v4l2-ctl" => Some("v4l-utils"),
        "lsusb" => Some("usbutils"),
        _ => None,
    }
}

/// libcamera apps are only packaged for Raspberry Pi OS.
fn write_libcamera_note(
    out: &mut dyn Write,
    palette: Palette,
    missing: &[&Dependency],
) -> io::Result<()> {
    if !missing.iter().any(|d| LIBCAMERA_TOOLS.contains(&d.name.as_str())) {
        return Ok(());
    }
    write_subsection(out, palette, "libcamera apps")?;
    writeln!(
        out,
        "  libcamera-still and libcamera-jpeg ship with Raspberry Pi OS (libcamera-apps)."
    )?;
    writeln!(out, "  On other distributions build rpicam-apps from source:")?;
    writeln!(out, "  https://github.com/raspberrypi/rpicam-apps")
}

fn write_generic_instructions(
    out: &mut dyn Write,
    palette: Palette,
    missing: &[&Dependency],
) -> io::Result<()> {
    write_subsection(out, palette, "Package Installation")?;
    writeln!(out, "  Your distribution was not auto-detected.")?;
    writeln!(out, "  Please install the following packages using your package manager:")?;
    writeln!(out)?;

    for dep in missing {
        match &dep.package {
            Some(package) => writeln!(
                out,
                "  - {}: {} (package: {package})",
                dep.name, dep.description
            )?,
            None => writeln!(out, "  - {}: {}", dep.name, dep.description)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "  Common package manager commands:")?;
    writeln!(out, "  - Debian/Ubuntu: sudo apt install <package>")?;
    writeln!(out, "  - Fedora/RHEL:   sudo dnf install <package>")?;
    writeln!(out, "  - Arch Linux:    sudo pacman -S <package>")?;
    writeln!(out, "  - openSUSE:      sudo zypper install <package>")
}
