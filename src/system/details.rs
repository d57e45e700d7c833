//! Immutable host identity snapshot, built once at startup.

use anyhow::{Context, Result};
use sysinfo::System;

use crate::system::os_release::OsRelease;

pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Static host facts shown in the info panel. Collected before the render
/// loop starts and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SystemDetails {
    pub host_name: String,
    pub device_name: String,
    pub pretty_name: String,
    pub kernel_name: String,
    pub kernel_release: String,
}

impl SystemDetails {
    /// Collect the snapshot from the live system. Any missing piece is
    /// fatal: the display is useless without a complete identity block.
    pub fn collect() -> Result<Self> {
        let os_release = OsRelease::from_file(OS_RELEASE_PATH)?;
        let host_name = System::host_name().context("could not determine host name")?;
        let device_name =
            read_proc_identity("/proc/sys/kernel/hostname").unwrap_or_else(|| host_name.clone());
        let kernel_name =
            read_proc_identity("/proc/sys/kernel/ostype").unwrap_or_else(|| "Linux".to_string());
        let kernel_release =
            System::kernel_version().context("could not determine kernel release")?;

        Self::from_parts(&os_release, host_name, device_name, kernel_name, kernel_release)
    }

    /// Assemble details from an already-parsed os-release source.
    /// Fails when `PRETTY_NAME` is absent.
    pub fn from_parts(
        os_release: &OsRelease,
        host_name: String,
        device_name: String,
        kernel_name: String,
        kernel_release: String,
    ) -> Result<Self> {
        let pretty_name = os_release
            .get("PRETTY_NAME")
            .context("PRETTY_NAME not present in os-release")?
            .to_string();

        Ok(Self {
            host_name,
            device_name,
            pretty_name,
            kernel_name,
            kernel_release,
        })
    }
}

/// Single-value procfs identity read (nodename, ostype).
fn read_proc_identity(path: &str) -> Option<String> {
    let v = std::fs::read_to_string(path).ok()?;
    let v = v.trim();
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}
