use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

const CHOICE_SHORTCUTS: [(&str, &str); 8] = [
    ("j / ↓", "Next option or quiz"),
    ("k / ↑", "Previous option or quiz"),
    ("enter / l / →", "Open quiz / confirm answer"),
    ("h / ← / bksp", "Previous question"),
    ("r", "Retry the quiz (results)"),
    ("esc", "Back to the catalog"),
    ("? / F1", "Toggle this help"),
    ("q / ctrl-c", "Quit"),
];

/// While typing an answer, letter keys are text.
const TYPING_SHORTCUTS: [(&str, &str); 6] = [
    ("letters", "Type the answer"),
    ("backspace", "Delete a typed character"),
    ("enter", "Confirm answer"),
    ("←", "Previous question"),
    ("esc", "Back to the catalog"),
    ("F1 / ctrl-c", "Toggle this help / quit"),
];

fn shortcuts(typing: bool) -> &'static [(&'static str, &'static str)] {
    if typing {
        &TYPING_SHORTCUTS
    } else {
        &CHOICE_SHORTCUTS
    }
}

/// Draws the shortcut overlay on top of whatever screen is showing.
pub fn render(frame: &mut Frame, area: Rect, typing: bool) {
    let shortcuts = shortcuts(typing);
    let area = centered(area, 56, shortcuts.len() as u16 + 6);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "KEYBOARD SHORTCUTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];
    lines.extend(shortcuts.iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(format!("  {:<16}", keys), Style::default().fg(Color::Yellow)),
            Span::raw(*action),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if typing { "Press F1 or esc to close" } else { "Press ? or esc to close" },
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Help ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(2)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(typing: bool, keys: &str) -> Option<&'static str> {
        shortcuts(typing)
            .iter()
            .find(|(k, _)| k.contains(keys))
            .map(|(_, action)| *action)
    }

    #[test]
    fn test_backspace_matches_mode() {
        assert_eq!(action(true, "backspace"), Some("Delete a typed character"));
        assert_eq!(action(false, "bksp"), Some("Previous question"));
        assert_eq!(action(false, "backspace"), None);
    }

    #[test]
    fn test_letter_shortcuts_only_outside_typing() {
        assert!(action(false, "h /").is_some());
        assert!(action(true, "h /").is_none());
        assert!(action(true, "?").is_none());
    }
}
