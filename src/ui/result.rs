use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::results::{Grade, Mistake, QuizResults};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(results) = app.results() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], results);
    render_mistakes(frame, chunks[2], &results.mistakes, app.result_scroll());
    super::render_controls(frame, chunks[3], "j/k scroll  ·  r retry  ·  esc catalog  ·  q quit");
}

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Excellent => Color::Green,
        Grade::Good => Color::Cyan,
        Grade::Fair => Color::Yellow,
        Grade::NeedsWork => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, results: &QuizResults) {
    let grade = results.grade();
    let color = grade_color(grade);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                results.correct,
                results.total,
                results.percentage()
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(grade.label(), Style::default().fg(color))),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_mistakes(frame: &mut Frame, area: Rect, mistakes: &[Mistake], scroll: usize) {
    if mistakes.is_empty() {
        let widget = Paragraph::new("No mistakes. Well done!")
            .alignment(Alignment::Center)
            .fg(Color::Green);
        frame.render_widget(widget, area);
        return;
    }

    let widget = Paragraph::new(mistake_lines(&mistakes[scroll.min(mistakes.len() - 1)..]))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Mistakes ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn mistake_lines(mistakes: &[Mistake]) -> Vec<Line<'_>> {
    let mut lines = Vec::with_capacity(mistakes.len() * 5);

    for mistake in mistakes {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:2}. ", mistake.question_number),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(mistake.prompt.as_str(), Style::default().fg(Color::White).bold()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("    Your answer:    ", Style::default().fg(Color::DarkGray)),
            Span::styled(mistake.your_answer.as_str(), Style::default().fg(Color::Red)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("    Correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(mistake.correct_answer.as_str(), Style::default().fg(Color::Green)),
        ]));
        if let Some(explanation) = &mistake.explanation {
            lines.push(Line::from(Span::styled(
                format!("    {}", explanation),
                Style::default().fg(Color::Gray).italic(),
            )));
        }
        lines.push(Line::from(""));
    }

    lines
}
