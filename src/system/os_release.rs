//! `/etc/os-release` parsing (`key="value"` lines).

use std::path::Path;

use anyhow::{Context, Result};

/// Parsed os-release contents: key/value pairs in file order.
///
/// Duplicate keys are kept as-is; [`OsRelease::get`] returns the first match.
#[derive(Debug, Clone, Default)]
pub struct OsRelease {
    entries: Vec<(String, String)>,
}

impl OsRelease {
    /// Parse os-release text. One pair per line, split on the first `=`,
    /// with surrounding double quotes stripped from the value.
    /// Empty lines, comments and lines without a `=` are skipped.
    pub fn parse(content: &str) -> Self {
        let mut entries = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            entries.push((
                key.trim().to_string(),
                value.trim().trim_matches('"').to_string(),
            ));
        }

        Self { entries }
    }

    /// Read and parse an os-release file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// First value stored under `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
