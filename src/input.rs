use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::interaction::Intent;

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let Some(intent) = control_intent(key.code) {
            intent.apply(app);
        }
        return;
    }
    match key.code {
        KeyCode::Esc => Intent::Quit.apply(app),
        other => app.on_key(other),
    }
}

fn control_intent(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Char('y') => Some(Intent::Copy),
        KeyCode::Char('l') => Some(Intent::Clear),
        KeyCode::Char('q') | KeyCode::Char('c') => Some(Intent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_shortcuts_map_to_intents() {
        let mut app = App::default();
        handle_key_event(&mut app, press(KeyCode::Char('y'), KeyModifiers::CONTROL));
        assert!(app.copy_requested);
        handle_key_event(&mut app, press(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn plain_chars_edit_the_tag() {
        let mut app = App::default();
        handle_key_event(&mut app, press(KeyCode::Char('#'), KeyModifiers::NONE));
        handle_key_event(&mut app, press(KeyCode::Char('Q'), KeyModifiers::SHIFT));
        assert_eq!(app.input.value(), "#Q");
        assert!(!app.should_quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::default();
        let mut key = press(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut app, key);
        assert!(app.input.is_blank());
    }
}
