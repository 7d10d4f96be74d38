use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;

pub fn render_message(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = match &app.message {
        Some(message) => message
            .lines()
            .map(|l| Line::from(Span::raw(l.to_string())))
            .collect(),
        None => vec![Line::from(Span::styled(
            "Nenhuma mensagem gerada ainda.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.message_scroll, 0))
        .alignment(Alignment::Left)
        .block(
            Block::default().borders(Borders::ALL).title(Span::styled(
                "Mensagem Gerada:",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
        );
    frame.render_widget(panel, area);
}
