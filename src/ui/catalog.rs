use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new("QUIZZES")
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, chunks[0]);

    if app.has_catalog() {
        render_entries(frame, chunks[1], app);
    } else {
        render_empty(frame, chunks[1]);
    }

    if let Some(status) = app.status() {
        let widget = Paragraph::new(status).alignment(Alignment::Center).fg(Color::Red);
        frame.render_widget(widget, chunks[2]);
    }

    super::render_controls(frame, chunks[3], "j/k navigate  ·  enter open  ·  ? help  ·  q quit");
}

fn render_entries(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::with_capacity(app.catalog().len() * 3);

    for (index, entry) in app.catalog().iter().enumerate() {
        let is_selected = index == app.catalog_selected();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if is_selected { ">" } else { " " };

        let mut meta = question_count_text(entry.question_count);
        if let Some(date) = entry.display_date() {
            meta.push_str(" · ");
            meta.push_str(&date);
        }

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(entry.topic.as_str(), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", meta),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    // Keep the highlighted entry on screen.
    let visible_entries = (area.height.saturating_sub(2) / 3).max(1) as usize;
    let first = app.catalog_selected().saturating_sub(visible_entries - 1);

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        )
        .scroll(((first * 3) as u16, 0));
    frame.render_widget(widget, area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from("No quizzes available yet.".fg(Color::Gray)),
        Line::from(""),
        Line::from("Add quiz files and run `quiz-player manifest`.".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn question_count_text(count: usize) -> String {
    if count == 1 {
        "1 question".to_string()
    } else {
        format!("{} questions", count)
    }
}
