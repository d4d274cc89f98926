use crate::constants::{CHART_TITLE, CHART_Y_LABEL, CHART_Y_MAX};
use crate::game::Strategy;
use crate::simulator::{SimReport, StrategyStats};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph,
    },
    Frame,
};

/// Chart and metric colour for a strategy
pub fn strategy_color(strategy: Strategy) -> Color {
    match strategy {
        Strategy::Stay => Color::Red,
        Strategy::Switch => Color::Green,
    }
}

/// Draws the two win-rate metrics side by side
pub fn draw_metrics(frame: &mut Frame, area: Rect, report: &SimReport) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (stats, chunk) in report.strategies().into_iter().zip(chunks.iter()) {
        draw_metric(frame, *chunk, stats);
    }
}

fn draw_metric(frame: &mut Frame, area: Rect, stats: &StrategyStats) {
    let color = strategy_color(stats.strategy);

    let lines = vec![
        Line::from(Span::styled(
            format!("{:.2}%", stats.win_rate),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} wins of {}", stats.wins, stats.trials),
            Style::default().fg(Color::Gray),
        )),
    ];

    let metric = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} Strategy Win Rate ", stats.strategy.label())),
    );
    frame.render_widget(metric, area);
}

/// Draws the stay/switch bar chart on a fixed 0-100 scale
pub fn draw_chart(frame: &mut Frame, area: Rect, report: &SimReport) {
    let bars: Vec<Bar> = report
        .strategies()
        .iter()
        .map(|stats| {
            let color = strategy_color(stats.strategy);
            Bar::default()
                .value(stats.win_rate.round() as u64)
                .text_value(format!("{:.2}%", stats.win_rate))
                .label(Line::from(stats.strategy.label()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    // Two bars with a bar-wide gap on either side
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / 5).clamp(1, 20);
    let bar_gap = bar_width;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Title::from(format!(" {} ", CHART_TITLE)).alignment(Alignment::Center))
        .title(
            Title::from(format!(" {}: 0-{} ", CHART_Y_LABEL, CHART_Y_MAX))
                .position(Position::Bottom)
                .alignment(Alignment::Center),
        );

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(CHART_Y_MAX);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_colors_match_legend() {
        assert_eq!(strategy_color(Strategy::Stay), Color::Red);
        assert_eq!(strategy_color(Strategy::Switch), Color::Green);
    }
}
