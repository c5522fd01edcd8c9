use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::game::{Feedback, STREAK_TARGET};

const OPTION_LABELS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let question = engine.current_question();

    let chunks = Layout::vertical([
        Constraint::Length(2), // streak stars
        Constraint::Length(1), // progress
        Constraint::Length(5), // question text
        Constraint::Min(8),    // options
        Constraint::Length(1), // controls
    ])
    .margin(1)
    .split(area);

    render_streak(frame, chunks[0], engine.streak());
    render_progress(frame, chunks[1], engine.streak());
    render_question_text(frame, chunks[2], &question.text);
    render_options(
        frame,
        chunks[3],
        &question.options,
        app.selected_option(),
        engine.feedback(),
    );
    render_controls(frame, chunks[4], engine.feedback());

    if engine.feedback() == Some(Feedback::Wrong) {
        render_wrong_overlay(frame, area, &question.correct_answer);
    }
}

fn render_streak(frame: &mut Frame, area: Rect, streak: u32) {
    let mut spans = Vec::with_capacity(STREAK_TARGET as usize);
    for i in 1..=STREAK_TARGET {
        if i <= streak {
            spans.push(Span::styled("★ ", Style::default().fg(Color::Yellow)));
        } else {
            spans.push(Span::styled("☆ ", Style::default().fg(Color::DarkGray)));
        }
    }

    let widget = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, streak: u32) {
    let remaining = STREAK_TARGET - streak;
    let progress = format!(
        "Question {} of {}  ·  {} to unlock",
        streak + 1,
        STREAK_TARGET,
        remaining
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    selected: usize,
    feedback: Option<Feedback>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = match (is_selected, feedback) {
            (true, Some(Feedback::Correct)) => Style::default().fg(Color::Green).bold(),
            (true, Some(Feedback::Wrong)) => Style::default().fg(Color::Red).bold(),
            (true, None) => Style::default().fg(Color::Cyan).bold(),
            (false, _) => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected { ">" } else { " " };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, feedback: Option<Feedback>) {
    let text = match feedback {
        Some(Feedback::Wrong) => "enter retry",
        _ => "j/k navigate  ·  enter answer  ·  q quit",
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_wrong_overlay(frame: &mut Frame, area: Rect, correct_answer: &str) {
    let panel = centered_panel(area, 40, 9);
    frame.render_widget(Clear, panel);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "WRONG!",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from("Streak broken, back to zero".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                correct_answer.to_string(),
                Style::default().fg(Color::Green).bold(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER to try again",
            Style::default().fg(Color::White).bold(),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Red),
    );
    frame.render_widget(widget, panel);
}

fn centered_panel(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
