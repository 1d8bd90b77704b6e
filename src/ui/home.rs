use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::event::FetchState;

/// Landing screen: headline metrics plus the two entry points into the
/// analysis flows.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let hero = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  AI-Powered Market Analytics",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  BIST & global market data, multi-model predictions, 1997-2025 coverage.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [G] ", Style::default().fg(Color::Yellow)),
            Span::styled("Get Started: pick an analysis operation   ", Style::default().fg(Color::Gray)),
            Span::styled("[S] ", Style::default().fg(Color::Yellow)),
            Span::styled("Symbol Search & Analysis", Style::default().fg(Color::Gray)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(hero).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        rows[0],
    );

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(rows[1]);

    let symbols_value = match &state.symbols {
        FetchState::Loaded(catalog) => catalog.len().to_string(),
        FetchState::Loading => "...".to_string(),
        FetchState::Failed(_) => "offline".to_string(),
        _ => "-".to_string(),
    };
    metric_tile(frame, tiles[0], "Symbols Tracked", &symbols_value, Color::Cyan);
    metric_tile(frame, tiles[1], "Analysis Tools", "9", Color::Magenta);
    metric_tile(frame, tiles[2], "ML Models", "3+", Color::Green);
    metric_tile(frame, tiles[3], "Years of Data", "28", Color::Yellow);
}

fn metric_tile(frame: &mut Frame, area: Rect, label: &str, value: &str, color: Color) {
    let lines = vec![
        Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
