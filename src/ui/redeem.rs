use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

use super::tag_color;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let (Some(gift), Some(code)) = (session.gift(), session.code()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "WINNING TICKET",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            gift.name.clone(),
            Style::default().fg(tag_color(&gift.color)).bold(),
        )),
        Line::from(""),
        Line::from("─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("REDEMPTION CODE".fg(Color::DarkGray)),
        Line::from(Span::styled(
            code.display_token().to_string(),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from("Show this screen to a staff member to collect".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Yellow)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, chunks[1]);
}
