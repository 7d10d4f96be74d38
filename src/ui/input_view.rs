use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::app::App;

const PLACEHOLDER: &str = "Digite a tag do jogador (ex: #289C0P8Q8)";

pub fn render_input(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let button = if app.is_loading() {
        Span::styled("⏳ Buscando...", Style::default().fg(Color::Yellow))
    } else if app.input.is_blank() {
        Span::styled("🎯 Gerar", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            "🎯 Gerar",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    };

    let field = if app.input.value().is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.input.value().to_string(), Style::default().fg(Color::White))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::new(1, 1, 0, 0))
        .title(Span::styled(
            "Tag",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(button).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(Line::from(field)).block(block), area);

    if !app.is_loading() {
        let max_x = inner.x.saturating_add(inner.width.saturating_sub(1));
        let x = inner
            .x
            .saturating_add(app.input.cursor() as u16)
            .min(max_x);
        frame.set_cursor_position((x, inner.y));
    }
}
