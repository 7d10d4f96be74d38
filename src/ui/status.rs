use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, FetchStatus};
use crate::config::Config;

pub fn render_status(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &App,
    cfg: &Config,
) {
    let (status_text, status_style) = status_line(app, cfg);

    let lines = vec![
        Line::from(Span::styled(
            "Clash of Clans - Clã Insanos",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(status_text, status_style)),
    ];

    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        "⚔️ Gerador de Boas-Vindas",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ));
    let status = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left)
        .block(block);
    frame.render_widget(status, area);
}

fn status_line(app: &App, cfg: &Config) -> (String, Style) {
    if let FetchStatus::Failed(err) = &app.fetch {
        return (err.clone(), Style::default().fg(Color::Red));
    }
    if app.is_loading() {
        return (
            "⏳ Buscando...".to_string(),
            Style::default().fg(Color::Yellow),
        );
    }
    if let Some(err) = &app.copy_error {
        return (err.clone(), Style::default().fg(Color::Red));
    }
    if app.show_copied(cfg.copied_flash) {
        return (
            format!("✅ Copiado! ({})", cfg.message_output_path.display()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    }
    if cfg.api_token.is_none() {
        return (
            "Sem token da API: defina CLANWELCOME_API_TOKEN".to_string(),
            Style::default().fg(Color::Yellow),
        );
    }
    match app.fetched_at {
        Some(at) => (
            format!("Mensagem gerada às {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::Green),
        ),
        None => ("Pronto".to_string(), Style::default().fg(Color::DarkGray)),
    }
}
