use crate::app::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Quit,
    Submit,
    Copy,
    Clear,
    ScrollMessage { delta: i32 },
}

impl Intent {
    pub fn apply(self, app: &mut App) {
        match self {
            Intent::Quit => {
                app.should_quit = true;
            }
            Intent::Submit => {
                app.request_fetch();
            }
            Intent::Copy => {
                app.copy_requested = true;
            }
            Intent::Clear => {
                if !app.is_loading() {
                    app.clear();
                }
            }
            Intent::ScrollMessage { delta } => {
                let current = app.message_scroll as i32;
                app.message_scroll = (current + delta).clamp(0, u16::MAX as i32) as u16;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_saturates_at_zero() {
        let mut app = App::default();
        Intent::ScrollMessage { delta: 10 }.apply(&mut app);
        Intent::ScrollMessage { delta: -3 }.apply(&mut app);
        assert_eq!(app.message_scroll, 7);
        Intent::ScrollMessage { delta: -30 }.apply(&mut app);
        assert_eq!(app.message_scroll, 0);
    }

    #[test]
    fn copy_only_flags_request() {
        let mut app = App::default();
        Intent::Copy.apply(&mut app);
        assert!(app.copy_requested);
        assert!(app.copied_at.is_none());
    }

    #[test]
    fn clear_is_ignored_while_loading() {
        let mut app = App::default();
        app.fetch = crate::app::FetchStatus::Pending;
        app.message = Some("msg".into());
        Intent::Clear.apply(&mut app);
        assert!(app.message.is_some());
        Intent::Quit.apply(&mut app);
        assert!(app.should_quit);
    }
}
