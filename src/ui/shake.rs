use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

const METER_SEGMENTS: u32 = 10;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);

    let percent = app.shake_percent();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "SHAKE IT!",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from("Hammer SPACE to shake the gift box open".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(meter_spans(percent)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", percent),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(status_span(app)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn meter_spans(percent: u32) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(METER_SEGMENTS as usize);
    for i in 0..METER_SEGMENTS {
        let filled = percent >= (i + 1) * (100 / METER_SEGMENTS);
        let style = if filled {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("██ ", style));
    }
    spans
}

fn status_span(app: &App) -> Span<'static> {
    if app.is_out_of_stock() {
        Span::styled(
            "All gifts have been claimed!",
            Style::default().fg(Color::Red).bold(),
        )
    } else if app.is_claim_pending() {
        Span::styled(
            "Revealing your gift...",
            Style::default().fg(Color::Cyan).bold(),
        )
    } else {
        Span::styled("", Style::default())
    }
}
