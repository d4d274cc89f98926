use crate::constants::{ABOUT_LINES, ABOUT_TITLE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws the explanation of the puzzle under the chart
pub fn draw_about_panel(frame: &mut Frame, area: Rect) {
    let last = ABOUT_LINES.len() - 1;

    let lines: Vec<Line> = ABOUT_LINES
        .iter()
        .enumerate()
        .map(|(i, text)| {
            // The punchline gets highlighted
            let style = if i == last {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Gray)),
                Span::styled(*text, style),
            ])
        })
        .collect();

    let about = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", ABOUT_TITLE)),
    );
    frame.render_widget(about, area);
}
