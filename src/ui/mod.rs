mod catalog;
mod help;
mod quiz;
mod result;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Catalog => catalog::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }

    if app.show_help() {
        help::render(frame, area, app.is_typing());
    }
}

/// Controls hint shared by every screen's footer.
fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
