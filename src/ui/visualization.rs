use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::chart::SeriesChart;
use super::dashboard::{EmptyStatePanel, LoadingPanel, StatCardsPanel};
use super::AppState;
use crate::event::FetchState;
use crate::model::range::CHART_RANGES;

/// Chart workspace: one operation, one symbol, one range, one chart type.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // operation header
            Constraint::Length(3), // symbol input
            Constraint::Length(5), // stat cards
            Constraint::Length(1), // range + chart-type selectors
            Constraint::Min(8),    // chart
            Constraint::Length(4), // summary
        ])
        .split(area);

    render_operation_header(frame, rows[0], state);
    render_symbol_input(frame, rows[1], state);

    if let Some(stats) = &state.viz.stats {
        frame.render_widget(
            StatCardsPanel {
                stats,
                range: state.viz.range,
            },
            rows[2],
        );
    }

    render_selectors(frame, rows[3], state);
    render_chart(frame, rows[4], state);
    render_summary(frame, rows[5], state);

    if state.viz.editing {
        render_suggestions(frame, rows[1], state);
    }
}

fn render_operation_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(op) = &state.nav.operation else {
        return;
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", op.icon), Style::default().fg(op.color)),
            Span::styled(
                op.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", op.description),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_symbol_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let (content, border) = if state.viz.editing {
        (
            format!("{}█", state.viz.input),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (
            state.viz.selected_symbol.clone(),
            Style::default().fg(Color::DarkGray),
        )
    };
    let block = Block::default()
        .title(" Symbol (/ to edit) ")
        .borders(Borders::ALL)
        .border_style(border);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            content,
            Style::default().fg(Color::White),
        )))
        .block(block),
        area,
    );
}

/// Dropdown under the input, drawn over whatever is below it.
fn render_suggestions(frame: &mut Frame, input_area: Rect, state: &AppState) {
    let suggestions = state.viz_suggestions();
    if suggestions.is_empty() {
        return;
    }
    let height = (suggestions.len() as u16 + 2).min(12);
    let area = Rect {
        x: input_area.x,
        y: input_area.y + input_area.height,
        width: input_area.width.min(30),
        height,
    }
    .intersection(frame.area());
    if area.is_empty() {
        return;
    }
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = suggestions
        .iter()
        .enumerate()
        .map(|(i, symbol)| {
            let style = if i == state.viz.suggestion_index {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(symbol.clone(), style))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        area,
    );
}

fn render_selectors(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(" Range: ", Style::default().fg(Color::DarkGray))];
    for range in CHART_RANGES {
        let style = if range == state.viz.range {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", range), style));
    }
    spans.push(Span::styled(
        "   Chart: ",
        Style::default().fg(Color::DarkGray),
    ));
    spans.push(Span::styled(
        format!(" {} ", state.viz.chart_kind.label()),
        Style::default().fg(Color::Yellow),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    match &state.viz.series {
        FetchState::Loaded(bars) => {
            let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
            let dates: Vec<&str> = bars.iter().map(|b| b.date.as_str()).collect();
            frame.render_widget(
                SeriesChart::new(
                    format!(
                        "{} - Close ({})",
                        state.viz.selected_symbol, state.viz.range
                    ),
                    &closes,
                )
                .kind(state.viz.chart_kind)
                .color(Color::Cyan)
                .dates(dates),
                area,
            );
        }
        FetchState::Loading => frame.render_widget(LoadingPanel, area),
        FetchState::Empty => frame.render_widget(
            EmptyStatePanel {
                message: "We couldn't find any data for the selected symbol and time range.",
            },
            area,
        ),
        FetchState::Failed(err) => {
            let block = Block::default()
                .title(" Fetch Failed ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red));
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    err.to_string(),
                    Style::default().fg(Color::Red),
                )))
                .block(block),
                area,
            );
        }
        FetchState::Idle => frame.render_widget(
            EmptyStatePanel {
                message: "Pick a symbol to load its series.",
            },
            area,
        ),
    }
}

fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let points = state
        .viz
        .stats
        .as_ref()
        .map(|s| s.data_points)
        .unwrap_or(0);
    let volatility = state
        .viz
        .stats
        .as_ref()
        .map(|s| format!("{:.2}%", s.volatility))
        .unwrap_or_else(|| "-".to_string());
    let lines = vec![
        Line::from(vec![
            Span::styled("Symbol: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                state.viz.selected_symbol.clone(),
                Style::default().fg(Color::Gray),
            ),
            Span::styled("   Range: ", Style::default().fg(Color::DarkGray)),
            Span::styled(state.viz.range.to_string(), Style::default().fg(Color::Gray)),
            Span::styled("   Points: ", Style::default().fg(Color::DarkGray)),
            Span::styled(points.to_string(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("Chart: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                state.viz.chart_kind.label(),
                Style::default().fg(Color::Gray),
            ),
            Span::styled("   Volatility: ", Style::default().fg(Color::DarkGray)),
            Span::styled(volatility, Style::default().fg(Color::Gray)),
        ]),
    ];
    let block = Block::default()
        .title(" Analysis Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
