//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::App;

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_pause(),
        KeyCode::Char('s') | KeyCode::Right => app.request_step(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => app.speed_up(),
        KeyCode::Char('-') | KeyCode::Down => app.slow_down(),
        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;

    fn app() -> App {
        App::new(&DisplayConfig::default(), "detector", "source")
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            press(&mut app, code);
            assert!(app.should_quit);
        }

        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_plain_c_does_not_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_pause_step_resume() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.paused);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.should_advance());
        assert!(!app.should_advance());
        press(&mut app, KeyCode::Char('p'));
        assert!(!app.paused);
    }

    #[test]
    fn test_speed_keys() {
        let mut app = app();
        let initial = app.tick_rate;
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.tick_rate, initial * 2);
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.tick_rate, initial);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut app, key);
        assert!(!app.should_quit);
    }
}
