mod quiz;
mod redeem;
mod shake;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::game::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Welcome => welcome::render(frame, area, app),
        Screen::Quiz => quiz::render(frame, area, app),
        Screen::Shake => shake::render(frame, area, app),
        Screen::Redeem => redeem::render(frame, area, app),
    }
}

/// Map a gift's color tag onto a terminal color.
fn tag_color(tag: &str) -> Color {
    match tag {
        "red" => Color::Red,
        "blue" => Color::Blue,
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        _ => Color::DarkGray,
    }
}
