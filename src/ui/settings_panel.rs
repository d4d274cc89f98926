use crate::app::App;
use crate::constants::{MAX_TRIALS, MIN_TRIALS, TRIAL_STEP};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// `12345` -> `12,345`
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Draws the sidebar with the trial count input and run details
pub fn draw_settings_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Simulation Settings ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Value
            Constraint::Length(1), // Position gauge
            Constraint::Length(2), // Bounds
            Constraint::Min(0),    // Run info
        ])
        .split(inner);

    let label = Paragraph::new("Number of Simulations").style(Style::default().fg(Color::Gray));
    frame.render_widget(label, chunks[0]);

    let trials = app.settings().trials();
    let value = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_count(trials),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(value, chunks[1]);

    let ratio = (trials - MIN_TRIALS) as f64 / (MAX_TRIALS - MIN_TRIALS) as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, chunks[2]);

    let bounds = Paragraph::new(format!(
        "min {} · max {} · step {}",
        format_count(MIN_TRIALS),
        format_count(MAX_TRIALS),
        TRIAL_STEP
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bounds, chunks[3]);

    let seed_note = if app.seed_pinned() {
        Span::styled(" (pinned)", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" (random)", Style::default().fg(Color::DarkGray))
    };
    let info = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Seed: "),
            Span::styled(
                app.report.seed.to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(seed_note),
        Line::from(""),
        Line::from(vec![
            Span::raw("Runs: "),
            Span::styled(app.runs.to_string(), Style::default().fg(Color::Cyan)),
        ]),
    ]);
    frame.render_widget(info, chunks[4]);
}
