mod about_panel;
mod help_overlay;
mod results_panel;
mod settings_panel;

use crate::app::App;
use crate::constants::APP_TITLE;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub use settings_panel::format_count;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.size();

    // Split vertically: title, content, footer
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Settings + results
            Constraint::Length(3), // Footer
        ])
        .split(size);

    draw_title(frame, v_chunks[0]);

    // Settings sidebar on the left, report on the right
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(v_chunks[1]);

    settings_panel::draw_settings_panel(frame, chunks[0], app);
    draw_report(frame, chunks[1], app);
    draw_footer(frame, v_chunks[2]);

    if app.show_help {
        help_overlay::draw_help_overlay(frame);
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// Strategy outcomes, chart, and the about blurb stacked vertically
fn draw_report(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Metrics
            Constraint::Min(10),   // Bar chart
            Constraint::Length(9), // About
        ])
        .split(area);

    results_panel::draw_metrics(frame, chunks[0], &app.report);
    results_panel::draw_chart(frame, chunks[1], &app.report);
    about_panel::draw_about_panel(frame, chunks[2]);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(Color::Gray);

    let controls = Line::from(vec![
        Span::styled("[↑/↓]", key),
        Span::styled(" ±100  ", hint),
        Span::styled("[PgUp/PgDn]", key),
        Span::styled(" ±10,000  ", hint),
        Span::styled("[R]", key),
        Span::styled(" Reroll  ", hint),
        Span::styled("[P]", key),
        Span::styled(" Pin seed  ", hint),
        Span::styled("[?]", key),
        Span::styled(" Help  ", hint),
        Span::styled("[Q]", key),
        Span::styled(" Quit", hint),
    ]);

    let footer = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::SimConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw_ui(frame, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_shows_rates_and_chart() {
        let app = App::new(SimConfig::default().seeded(42));
        let screen = render(&app, 120, 40);

        assert!(screen.contains("Monty Hall Problem Simulator"));
        assert!(screen.contains("Stay Strategy Win Rate"));
        assert!(screen.contains(&format!("{:.2}%", app.report.switch_win_rate())));
        assert!(screen.contains("Monty Hall Simulation Results"));
        assert!(screen.contains("1,000"));
    }

    #[test]
    fn test_draw_survives_tiny_terminal() {
        let mut app = App::new(SimConfig::default().seeded(42));
        app.show_help = true;
        render(&app, 20, 6);
    }
}
