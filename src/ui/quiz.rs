use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::QuestionKind;
use crate::session::QuizSession;

const TRUE_FALSE_LABELS: [&str; 2] = ["True", "False"];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let question = session.current_question();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Topic
        Constraint::Length(1), // Progress
        Constraint::Length(1),
        Constraint::Length(1), // Type label
        Constraint::Length(4), // Prompt
        Constraint::Fill(1),   // Answers
        Constraint::Length(1), // Status
        Constraint::Length(1), // Controls
    ])
    .margin(2)
    .split(area);

    let topic = Paragraph::new(session.topic()).fg(Color::Cyan).bold();
    frame.render_widget(topic, chunks[0]);

    render_progress(frame, chunks[1], session);

    let label = Paragraph::new(question.type_label()).fg(Color::DarkGray);
    frame.render_widget(label, chunks[3]);

    render_question_text(frame, chunks[4], &question.prompt);

    match &question.kind {
        QuestionKind::MultipleChoice { options, .. } => {
            render_options(frame, chunks[5], options, app.selected_option())
        }
        QuestionKind::TrueFalse { .. } => {
            render_options(frame, chunks[5], &TRUE_FALSE_LABELS, app.selected_option())
        }
        QuestionKind::FillBlank { .. } => render_text_input(frame, chunks[5], app.text_input()),
        QuestionKind::Unknown => {
            let widget = Paragraph::new("This question type is not supported; press enter to skip.")
                .fg(Color::Yellow);
            frame.render_widget(widget, chunks[5]);
        }
    }

    if let Some(status) = app.status() {
        let widget = Paragraph::new(status).alignment(Alignment::Center).fg(Color::Yellow);
        frame.render_widget(widget, chunks[6]);
    }

    let controls = if app.is_typing() {
        "type answer  ·  enter next  ·  ← back  ·  esc catalog"
    } else {
        "j/k navigate  ·  enter next  ·  h back  ·  ? help  ·  q quit"
    };
    super::render_controls(frame, chunks[7], controls);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let label = format!(
        "{} / {}",
        session.current_index(),
        session.total_questions()
    );
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(session.progress().clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options<S: AsRef<str>>(frame: &mut Frame, area: Rect, options: &[S], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_ref(), style),
        ]));
        lines.push(Line::from(""));
    }

    let visible_options = (area.height / 2).max(1) as usize;
    let first = selected.saturating_sub(visible_options - 1);

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll(((first * 2) as u16, 0));
    frame.render_widget(widget, area);
}

/// A, B, C, ... then numbers once the alphabet runs out.
fn option_label(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i).to_string())
        .unwrap_or_else(|| (index + 1).to_string())
}

fn render_text_input(frame: &mut Frame, area: Rect, input: &str) {
    let content = if input.is_empty() {
        Line::from("Type your answer...".fg(Color::DarkGray))
    } else {
        Line::from(vec![
            Span::styled(input, Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ])
    };

    let area = Rect {
        height: area.height.min(3),
        ..area
    };
    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
