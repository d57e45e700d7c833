//! Per-frame collection of the live system values.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use sysinfo::System;

use crate::app::App;
use crate::system::meminfo::MemSnapshot;

pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// Re-reads the dynamic sources each frame: uptime, memory, wall clock.
pub struct Collector {
    meminfo_path: PathBuf,
}

impl Collector {
    pub fn new() -> Self {
        Self {
            meminfo_path: MEMINFO_PATH.into(),
        }
    }

    /// Refresh the dynamic fields on the App. An unreadable meminfo source
    /// aborts the frame and bubbles up as a fatal error.
    pub fn refresh(&self, app: &mut App) -> Result<()> {
        app.uptime_seconds = System::uptime();
        app.memory = MemSnapshot::from_file(&self.meminfo_path)?;
        app.clock = Local::now();
        app.tick += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::system::details::SystemDetails;
    use crate::system::os_release::OsRelease;

    fn test_app() -> App {
        let os_release = OsRelease::parse("PRETTY_NAME=\"Test Linux\"\n");
        let details = SystemDetails::from_parts(
            &os_release,
            "box".to_string(),
            "box.lan".to_string(),
            "Linux".to_string(),
            "6.1.0".to_string(),
        )
        .expect("details");
        App::new(details)
    }

    #[test]
    fn refresh_populates_memory_and_advances_tick() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"MemTotal: 1048576 kB\nMemAvailable: 524288 kB\n")
            .expect("write");

        let collector = Collector {
            meminfo_path: file.path().to_path_buf(),
        };
        let mut app = test_app();

        collector.refresh(&mut app).expect("refresh");
        assert_eq!(app.memory.to_string(), "512/1024 (50.00% used)");
        assert_eq!(app.tick, 1);

        collector.refresh(&mut app).expect("refresh");
        assert_eq!(app.tick, 2);
    }

    #[test]
    fn unreadable_meminfo_is_an_error() {
        let collector = Collector {
            meminfo_path: PathBuf::from("/nonexistent/meminfo"),
        };
        let mut app = test_app();
        assert!(collector.refresh(&mut app).is_err());
    }
}
