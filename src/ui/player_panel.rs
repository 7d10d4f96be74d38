use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::player::PlayerProfile;
use crate::ui::display::{number_or_dash, or_dash};

pub fn render_player(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let lines = match &app.player {
        Some(player) => player_lines(player),
        None => vec![Line::from(Span::styled(
            "Nenhum jogador carregado.",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let panel = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default().borders(Borders::ALL).title(Span::styled(
            "📌 Dados do Jogador:",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
    );
    frame.render_widget(panel, area);
}

fn player_lines(player: &PlayerProfile) -> Vec<Line<'static>> {
    let label = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    [
        ("Nome: ", or_dash(player.name.as_deref())),
        ("Tag: ", or_dash(player.tag.as_deref())),
        ("CV: ", number_or_dash(player.town_hall_level)),
        ("Level: ", number_or_dash(player.exp_level)),
    ]
    .into_iter()
    .map(|(name, value)| Line::from(vec![Span::styled(name, label), Span::raw(value)]))
    .collect()
}
