use ratatui::layout::{Constraint, Direction, Layout};

mod display;
mod footer;
mod input_view;
mod message_view;
mod player_panel;
mod status;

use crate::app::App;
use crate::config::Config;

pub fn render(frame: &mut ratatui::Frame, app: &App, cfg: &Config) {
    let size = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(size);

    status::render_status(frame, layout[0], app, cfg);
    input_view::render_input(frame, layout[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(layout[2]);
    message_view::render_message(frame, body[0], app);
    player_panel::render_player(frame, body[1], app);

    footer::render_footer(frame, layout[3]);
}
