use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::KeyCode;

use crate::interaction::Intent;
use crate::player::PlayerProfile;

use super::TagInput;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct App {
    pub should_quit: bool,
    pub input: TagInput,
    pub fetch: FetchStatus,
    pub fetch_drawn: bool,
    pub player: Option<PlayerProfile>,
    pub message: Option<String>,
    pub message_scroll: u16,
    pub fetched_at: Option<DateTime<Local>>,
    pub copy_requested: bool,
    pub copied_at: Option<Instant>,
    pub copy_error: Option<String>,
}

impl App {
    pub fn is_loading(&self) -> bool {
        self.fetch == FetchStatus::Pending
    }

    /// Queues a fetch for the current tag. Ignored while one is pending or the input is blank.
    pub fn request_fetch(&mut self) -> bool {
        if self.is_loading() || self.input.is_blank() {
            return false;
        }
        self.fetch = FetchStatus::Pending;
        self.fetch_drawn = false;
        self.copy_error = None;
        true
    }

    /// Called after each frame; a pending fetch only runs once its loading state is on screen.
    pub fn mark_drawn(&mut self) {
        self.fetch_drawn = self.is_loading();
    }

    pub fn fetch_ready(&self) -> bool {
        self.is_loading() && self.fetch_drawn
    }

    pub fn show_copied(&self, flash: Duration) -> bool {
        self.copied_at.is_some_and(|t| t.elapsed() < flash)
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.fetch = FetchStatus::Idle;
        self.fetch_drawn = false;
        self.player = None;
        self.message = None;
        self.message_scroll = 0;
        self.fetched_at = None;
        self.copy_requested = false;
        self.copied_at = None;
        self.copy_error = None;
    }

    pub fn on_key(&mut self, code: KeyCode) {
        if let Some(intent) = key_intent(code) {
            intent.apply(self);
            return;
        }
        if !self.is_loading() {
            self.input.handle_key(code);
        }
    }
}

fn key_intent(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Enter => Some(Intent::Submit),
        KeyCode::Up => Some(Intent::ScrollMessage { delta: -1 }),
        KeyCode::Down => Some(Intent::ScrollMessage { delta: 1 }),
        KeyCode::PageUp => Some(Intent::ScrollMessage { delta: -10 }),
        KeyCode::PageDown => Some(Intent::ScrollMessage { delta: 10 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> App {
        let mut app = App::default();
        for c in text.chars() {
            app.on_key(KeyCode::Char(c));
        }
        app
    }

    #[test]
    fn enter_queues_fetch_for_non_blank_tag() {
        let mut app = typed("#289C0P8Q8");
        app.on_key(KeyCode::Enter);
        assert!(app.is_loading());
    }

    #[test]
    fn enter_with_blank_tag_does_nothing() {
        let mut app = typed("   ");
        app.on_key(KeyCode::Enter);
        assert_eq!(app.fetch, FetchStatus::Idle);
    }

    #[test]
    fn typing_is_ignored_while_loading() {
        let mut app = typed("#AB");
        assert!(app.request_fetch());
        assert!(!app.request_fetch());
        app.on_key(KeyCode::Char('C'));
        app.on_key(KeyCode::Backspace);
        assert_eq!(app.input.value(), "#AB");
    }

    #[test]
    fn fetch_waits_for_loading_frame() {
        let mut app = typed("#AB");
        app.on_key(KeyCode::Enter);
        assert!(app.is_loading());
        assert!(!app.fetch_ready());
        app.mark_drawn();
        assert!(app.fetch_ready());

        app.fetch = FetchStatus::Idle;
        app.mark_drawn();
        assert!(!app.fetch_drawn);
    }

    #[test]
    fn copied_flash_expires() {
        let mut app = App::default();
        assert!(!app.show_copied(Duration::from_secs(2)));
        app.copied_at = Some(Instant::now());
        assert!(app.show_copied(Duration::from_secs(2)));
        assert!(!app.show_copied(Duration::ZERO));
    }

    #[test]
    fn clear_resets_everything() {
        let mut app = typed("#AB");
        app.message = Some("hi".into());
        app.player = Some(PlayerProfile::default());
        app.fetch = FetchStatus::Failed("boom".into());
        app.clear();
        assert!(app.input.is_blank());
        assert!(app.message.is_none());
        assert!(app.player.is_none());
        assert_eq!(app.fetch, FetchStatus::Idle);
    }
}
