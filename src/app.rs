use chrono::{DateTime, Local};

use crate::color_scheme::ColorScheme;
use crate::system::details::SystemDetails;
use crate::system::meminfo::MemSnapshot;

/// Main application state: the immutable identity snapshot plus the
/// dynamic values the collector refreshes every frame.
pub struct App {
    pub should_quit: bool,

    /// Static host facts, collected once at startup.
    pub details: SystemDetails,

    // Live data, recomputed each frame
    pub uptime_seconds: u64,
    pub memory: MemSnapshot,
    pub clock: DateTime<Local>,

    pub color_scheme: ColorScheme,

    /// Frame counter
    pub tick: u64,
}

impl App {
    pub fn new(details: SystemDetails) -> Self {
        Self {
            should_quit: false,
            details,
            uptime_seconds: 0,
            memory: MemSnapshot::default(),
            clock: Local::now(),
            color_scheme: ColorScheme::default(),
            tick: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::os_release::OsRelease;

    #[test]
    fn new_app_starts_running_with_zeroed_live_data() {
        let os_release = OsRelease::parse("PRETTY_NAME=\"Test Linux\"\n");
        let details = SystemDetails::from_parts(
            &os_release,
            "box".to_string(),
            "box.lan".to_string(),
            "Linux".to_string(),
            "6.1.0".to_string(),
        )
        .expect("details");

        let app = App::new(details);
        assert!(!app.should_quit);
        assert_eq!(app.tick, 0);
        assert_eq!(app.memory, MemSnapshot::default());
        assert_eq!(app.details.pretty_name, "Test Linux");
    }
}
