use chrono::Local;
use thiserror::Error;

use crate::api::{ApiError, PlayerApi};
use crate::app::{App, FetchStatus};
use crate::compose::compose;
use crate::error::render_error_message;
use crate::player::PlayerProfile;

pub const FETCH_NOTICE: &str = "Erro ao buscar dados do jogador. Verifique a tag e tente novamente.";

pub trait PlayerSource {
    fn get_player(&self, tag: &str) -> Result<PlayerProfile, ApiError>;
}

impl PlayerSource for PlayerApi {
    fn get_player(&self, tag: &str) -> Result<PlayerProfile, ApiError> {
        PlayerApi::get_player(self, tag)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("api error")]
    Api(#[from] ApiError),
}

pub struct FetchService;

impl FetchService {
    /// Resolves a pending fetch: on success the profile and composed message replace
    /// the previous ones, on failure both are cleared and the notice is shown.
    pub fn run<S: PlayerSource>(app: &mut App, source: &S) -> Result<(), FetchError> {
        if !app.fetch_ready() {
            return Ok(());
        }
        app.fetch_drawn = false;
        app.message_scroll = 0;
        app.copied_at = None;

        match source.get_player(app.input.value()) {
            Ok(profile) => {
                let message = compose(&profile);
                tracing::info!(
                    tag = profile.tag.as_deref().unwrap_or("-"),
                    lines = message.lines().count(),
                    "welcome message generated"
                );
                app.player = Some(profile);
                app.message = Some(message);
                app.fetched_at = Some(Local::now());
                app.fetch = FetchStatus::Idle;
                Ok(())
            }
            Err(err) => {
                app.player = None;
                app.message = None;
                app.fetch = FetchStatus::Failed(format!(
                    "{FETCH_NOTICE} ({})",
                    render_error_message(&err)
                ));
                Err(FetchError::Api(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::player::{ClanRef, HeroEntry};

    struct StubSource {
        result: fn(&str) -> Result<PlayerProfile, ApiError>,
        calls: Cell<usize>,
    }

    impl StubSource {
        fn new(result: fn(&str) -> Result<PlayerProfile, ApiError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl PlayerSource for StubSource {
        fn get_player(&self, tag: &str) -> Result<PlayerProfile, ApiError> {
            self.calls.set(self.calls.get() + 1);
            (self.result)(tag)
        }
    }

    fn found(tag: &str) -> Result<PlayerProfile, ApiError> {
        Ok(PlayerProfile {
            name: Some("Ana".into()),
            tag: Some(tag.to_string()),
            war_stars: Some(1200),
            clan: Some(ClanRef { name: Some("Insanos".into()) }),
            heroes: Some(vec![HeroEntry::new("Barbarian King", 95)]),
            ..Default::default()
        })
    }

    fn missing(tag: &str) -> Result<PlayerProfile, ApiError> {
        Err(ApiError::NotFound(tag.to_string()))
    }

    fn pending_app(tag: &str) -> App {
        let mut app = App::default();
        for c in tag.chars() {
            app.input.handle_key(crossterm::event::KeyCode::Char(c));
        }
        assert!(app.request_fetch());
        app.mark_drawn();
        app
    }

    #[test]
    fn successful_fetch_stores_profile_and_message() {
        let mut app = pending_app("#ABC");
        let source = StubSource::new(found);
        FetchService::run(&mut app, &source).unwrap();

        assert_eq!(app.fetch, FetchStatus::Idle);
        assert_eq!(app.player.as_ref().and_then(|p| p.tag.as_deref()), Some("#ABC"));
        let message = app.message.as_deref().unwrap();
        assert!(message.contains("Recebam @Ana no clã Insanos! 🔥"));
        assert!(message.contains("👑 Rei Bárbaro: 95 (MAX)"));
        assert!(app.fetched_at.is_some());
    }

    #[test]
    fn failed_fetch_clears_message_and_shows_notice() {
        let mut app = pending_app("#NOPE");
        app.message = Some("old".into());
        let source = StubSource::new(missing);
        let err = FetchService::run(&mut app, &source).unwrap_err();

        assert!(matches!(err, FetchError::Api(ApiError::NotFound(_))));
        assert!(app.message.is_none());
        match &app.fetch {
            FetchStatus::Failed(text) => {
                assert!(text.starts_with(FETCH_NOTICE));
                assert!(text.contains("#NOPE"));
            }
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn pending_fetch_waits_until_loading_state_is_drawn() {
        let mut app = App::default();
        app.input.handle_key(crossterm::event::KeyCode::Char('A'));
        assert!(app.request_fetch());
        let source = StubSource::new(found);

        FetchService::run(&mut app, &source).unwrap();
        assert_eq!(source.calls.get(), 0);
        assert!(app.is_loading());

        app.mark_drawn();
        FetchService::run(&mut app, &source).unwrap();
        assert_eq!(source.calls.get(), 1);
        assert_eq!(app.fetch, FetchStatus::Idle);
    }

    #[test]
    fn idle_app_does_not_hit_source() {
        let mut app = App::default();
        let source = StubSource::new(found);
        FetchService::run(&mut app, &source).unwrap();
        assert_eq!(source.calls.get(), 0);
        assert!(app.message.is_none());
    }
}
