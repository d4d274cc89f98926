use crate::constants::{MAX_TRIALS, MIN_TRIALS};
use crate::ui::format_count;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the key reference as a centered overlay
pub fn draw_help_overlay(frame: &mut Frame) {
    let size = frame.size();

    let dialog_width = 46.min(size.width.saturating_sub(4));
    let dialog_height = 15.min(size.height.saturating_sub(4));

    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let entry = |keys: &'static str, action: String| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", keys), key),
            Span::raw(action),
        ])
    };

    let lines = vec![
        Line::from(""),
        entry("↑ ↓ + -", "Trials ±100".to_string()),
        entry("PgUp PgDn", "Trials ±10,000".to_string()),
        entry("Home", format!("Trials = {}", format_count(MIN_TRIALS))),
        entry("End", format!("Trials = {}", format_count(MAX_TRIALS))),
        entry("R", "Rerun with a new seed".to_string()),
        entry("P", "Pin / unpin the current seed".to_string()),
        entry("Q Esc", "Quit".to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Every change reruns both strategies",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let title = Line::from(Span::styled(
        " Controls ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, dialog_area);
}
