//! `/proc/meminfo` parsing and the memory summary string.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// Memory usage snapshot in mebibytes, derived from `/proc/meminfo`.
///
/// Recomputed every frame; `used` is `total - available`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemSnapshot {
    pub total_mib: u64,
    pub available_mib: u64,
    pub used_mib: u64,
}

impl MemSnapshot {
    /// Parse meminfo text. Lines look like `MemTotal:       16384 kB`; only
    /// `MemTotal` and `MemAvailable` matter, every other label is ignored.
    pub fn parse(content: &str) -> Result<Self> {
        let mut total_kib = None;
        let mut available_kib = None;

        for line in content.lines() {
            let Some((label, rest)) = line.split_once(':') else {
                continue;
            };
            let slot = match label.trim() {
                "MemTotal" => &mut total_kib,
                "MemAvailable" => &mut available_kib,
                _ => continue,
            };
            let value = rest
                .trim()
                .trim_end_matches("kB")
                .trim()
                .parse::<u64>()
                .with_context(|| format!("bad numeric field for {}", label.trim()))?;
            slot.get_or_insert(value);
        }

        let total_kib = total_kib.context("MemTotal not present in meminfo")?;
        let available_kib = available_kib.context("MemAvailable not present in meminfo")?;

        let total_mib = total_kib / 1024;
        let available_mib = available_kib / 1024;
        Ok(Self {
            total_mib,
            available_mib,
            used_mib: total_mib.saturating_sub(available_mib),
        })
    }

    /// Read and parse a meminfo file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    /// Memory usage as a percentage of total.
    pub fn percent_used(&self) -> f64 {
        if self.total_mib == 0 {
            0.0
        } else {
            (self.used_mib as f64 / self.total_mib as f64) * 100.0
        }
    }
}

impl fmt::Display for MemSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.2}% used)",
            self.used_mib,
            self.total_mib,
            self.percent_used()
        )
    }
}
