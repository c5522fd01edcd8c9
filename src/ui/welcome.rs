use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

use super::tag_color;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GIFT QUIZ",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from("Answer 5 in a row to unlock the mystery gift".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(gift_dots(app)),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn gift_dots(app: &App) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for gift in app.gifts().iter().take(4) {
        spans.push(Span::styled(
            "● ",
            Style::default().fg(tag_color(&gift.color)),
        ));
    }
    spans
}
