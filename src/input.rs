use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Handle a single key input event. The only action is quitting.
pub fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
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
    fn q_quits() {
        let mut app = test_app();
        handle_input(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = test_app();
        handle_input(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut app = test_app();
        handle_input(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        handle_input(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        handle_input(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(!app.should_quit);
    }
}
