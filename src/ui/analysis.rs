use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::chart::{ChartKind, SeriesChart};
use super::dashboard::{EmptyStatePanel, LoadingPanel};
use super::{AppState, DerivedSeries};
use crate::api::types::{Prediction, SymbolDetail};
use crate::event::{AnalysisSnapshot, FetchState};
use crate::model::bar::Bar;
use crate::model::range::ANALYSIS_RANGES;

/// Symbol analysis workspace: search, statistics, prediction, derived
/// series, the historical table, and the comparison panel.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search input
            Constraint::Length(1), // range selector
            Constraint::Min(10),   // snapshot content
        ])
        .split(area);

    render_search(frame, rows[0], state);
    render_ranges(frame, rows[1], state);

    match &state.analysis.snapshot {
        FetchState::Loaded(snapshot) => render_snapshot(frame, rows[2], state, snapshot),
        FetchState::Loading => frame.render_widget(LoadingPanel, rows[2]),
        FetchState::Empty => frame.render_widget(
            EmptyStatePanel {
                message: "We couldn't find any data for this symbol. Check the symbol or try another one.",
            },
            rows[2],
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
                rows[2],
            );
        }
        FetchState::Idle => frame.render_widget(
            EmptyStatePanel {
                message: "Search for any symbol from the database (1997-2025).",
            },
            rows[2],
        ),
    }

    if state.analysis.editing {
        render_suggestions(frame, rows[0], state);
    }
}

fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
    let marked = if state.analysis.compare_picks.is_empty() {
        String::new()
    } else {
        format!(" | marked: {}", state.analysis.compare_picks.join(", "))
    };
    let (content, border) = if state.analysis.editing {
        (
            format!("{}█", state.analysis.query),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (
            state
                .nav
                .symbol
                .clone()
                .unwrap_or_else(|| "press / to search".to_string()),
            Style::default().fg(Color::DarkGray),
        )
    };
    let block = Block::default()
        .title(format!(" Symbol Search & Analysis{} ", marked))
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

fn render_suggestions(frame: &mut Frame, input_area: Rect, state: &AppState) {
    let suggestions = state.analysis_suggestions();
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
            let style = if i == state.analysis.suggestion_index {
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

fn render_ranges(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        " Time Range: ",
        Style::default().fg(Color::DarkGray),
    )];
    for range in ANALYSIS_RANGES {
        let style = if range == state.analysis.range {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", range), style));
    }
    spans.push(Span::styled(
        "   [V] series  [X] mark  [M] compare",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_snapshot(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &AnalysisSnapshot) {
    let has_comparison = state.analysis.comparison.loaded().is_some();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if has_comparison {
            vec![
                Constraint::Length(4),  // statistics cards
                Constraint::Min(9),     // charts + prediction
                Constraint::Length(7),  // historical table
                Constraint::Length(6),  // comparison
            ]
        } else {
            vec![
                Constraint::Length(4),
                Constraint::Min(9),
                Constraint::Length(9),
            ]
        })
        .split(area);

    render_statistics_cards(frame, rows[0], &snapshot.detail);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if snapshot.detail.prediction.is_some() {
            vec![Constraint::Ratio(3, 5), Constraint::Ratio(2, 5)]
        } else {
            vec![Constraint::Ratio(1, 1)]
        })
        .split(rows[1]);
    render_charts(frame, middle[0], state, snapshot);
    if let Some(prediction) = &snapshot.detail.prediction {
        render_prediction(frame, middle[1], prediction);
    }

    render_table(frame, rows[2], state, &snapshot.detail);

    if has_comparison {
        render_comparison(frame, rows[3], state);
    }
}

fn render_statistics_cards(frame: &mut Frame, area: Rect, detail: &SymbolDetail) {
    let stats = &detail.statistics;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let total_return = stats.returns_stats.total_return;
    let return_color = if total_return >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };
    stat_card(
        frame,
        cards[0],
        "Current Price",
        format!("{:.2}", stats.price_stats.current),
        format!("{:+.2}%", total_return),
        return_color,
    );
    stat_card(
        frame,
        cards[1],
        "Avg Daily Return",
        format!("{:.3}%", stats.returns_stats.avg_daily_return),
        format!("Sharpe: {:.2}", stats.returns_stats.sharpe_ratio),
        Color::Green,
    );
    stat_card(
        frame,
        cards[2],
        "Volatility",
        format!("{:.2}%", stats.returns_stats.volatility),
        format!("Std Dev: {:.2}", stats.price_stats.std),
        Color::Yellow,
    );
    stat_card(
        frame,
        cards[3],
        "Data Points",
        stats.total_records.to_string(),
        format!("{} → {}", stats.date_range.start, stats.date_range.end),
        Color::Blue,
    );
}

fn stat_card(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: String,
    sublabel: String,
    color: Color,
) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(sublabel, Style::default().fg(Color::DarkGray))),
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

/// The derived-series chart windows mirror the web dashboard: returns show
/// the recent 100 sessions, oscillating series the recent 200, and the
/// normalized price the whole history.
fn derived_values(detail: &SymbolDetail, series: DerivedSeries) -> Vec<(String, f64)> {
    let pick = |bars: &[Bar], f: fn(&Bar) -> Option<f64>| -> Vec<(String, f64)> {
        bars.iter()
            .map(|b| (b.date.clone(), f(b).unwrap_or(0.0)))
            .collect()
    };
    match series {
        DerivedSeries::Returns => {
            let start = detail.data.len().saturating_sub(100);
            pick(&detail.data[start..], |b| b.returns)
        }
        DerivedSeries::ZScore => {
            let start = detail.data.len().saturating_sub(200);
            pick(&detail.data[start..], |b| b.z_score)
        }
        DerivedSeries::NormalizedPrice => pick(&detail.data, |b| b.normalized_price),
        DerivedSeries::RollingVolatility => {
            let start = detail.data.len().saturating_sub(200);
            pick(&detail.data[start..], |b| b.volatility)
        }
    }
}

fn render_charts(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &AnalysisSnapshot) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    let closes: Vec<f64> = snapshot.range_data.iter().map(|b| b.close).collect();
    let dates: Vec<&str> = snapshot.range_data.iter().map(|b| b.date.as_str()).collect();
    frame.render_widget(
        SeriesChart::new(
            format!("Price Movement ({})", state.analysis.range),
            &closes,
        )
        .kind(ChartKind::Area)
        .color(Color::Cyan)
        .dates(dates),
        halves[0],
    );

    let series = state.analysis.derived_series;
    let points = derived_values(&snapshot.detail, series);
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let dates: Vec<&str> = points.iter().map(|(d, _)| d.as_str()).collect();
    let mut chart = SeriesChart::new(series.label(), &values).dates(dates);
    chart = match series {
        DerivedSeries::Returns => chart
            .kind(ChartKind::Bar)
            .color(Color::Green)
            .guide(0.0, Color::Red),
        DerivedSeries::ZScore => chart
            .kind(ChartKind::Line)
            .color(Color::Yellow)
            .guide(2.0, Color::Red)
            .guide(-2.0, Color::Green)
            .guide(0.0, Color::DarkGray),
        DerivedSeries::NormalizedPrice => chart.kind(ChartKind::Line).color(Color::Magenta),
        DerivedSeries::RollingVolatility => chart.kind(ChartKind::Area).color(Color::Yellow),
    };
    frame.render_widget(chart, halves[1]);
}

fn confidence_color(confidence: &str) -> Color {
    match confidence {
        c if c.eq_ignore_ascii_case("high") => Color::Green,
        c if c.eq_ignore_ascii_case("medium") => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_prediction(frame: &mut Frame, area: Rect, prediction: &Prediction) {
    let block = Block::default()
        .title(" Multi-Model Prediction ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let change_color = if prediction.predicted_change_percent >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Confidence: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(" {} ", prediction.confidence),
                Style::default()
                    .fg(Color::Black)
                    .bg(confidence_color(&prediction.confidence)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}", prediction.current_price),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("   Predicted ({}d): ", prediction.days_ahead),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{:.2}", prediction.predicted_price),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Expected change: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:+.2}%", prediction.predicted_change_percent),
                Style::default().fg(change_color),
            ),
            Span::styled("   Accuracy: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}%", prediction.accuracy),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];

    // Per-model scores, best first.
    let mut models: Vec<(&String, &crate::api::types::ModelScore)> =
        prediction.all_models.iter().collect();
    models.sort_by(|a, b| {
        b.1.test_r2
            .partial_cmp(&a.1.test_r2)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (name, score) in models {
        let is_best = *name == prediction.best_model;
        let name_style = if is_best {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", name), name_style),
            Span::styled(
                format!(
                    "acc {:>5.1}%  R² {:>6.3}  CV {:>6.3}  RMSE {:>8.2}",
                    score.accuracy, score.test_r2, score.cv_r2, score.rmse
                ),
                Style::default().fg(Color::Gray),
            ),
            if is_best {
                Span::styled(" BEST", Style::default().fg(Color::Green))
            } else {
                Span::raw("")
            },
        ]));
    }

    let basis = &prediction.prediction_basis;
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Model: {} · {} features · {} samples · {}-fold CV",
            prediction.best_model,
            basis.features_used,
            basis.training_samples,
            basis.cross_validation_folds
        ),
        Style::default().fg(Color::DarkGray),
    )));

    // Feature importances as proportional bars, strongest first.
    let mut features: Vec<(&String, &f64)> = basis.top_features.iter().collect();
    features.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
    if !features.is_empty() {
        lines.push(Line::from(Span::styled(
            "Top features:",
            Style::default().fg(Color::DarkGray),
        )));
        for (name, importance) in features.into_iter().take(5) {
            lines.push(importance_bar(name, *importance, Color::Cyan));
        }
    }
    let mut correlations: Vec<(&String, &f64)> = basis.top_correlations.iter().collect();
    correlations.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if !correlations.is_empty() {
        lines.push(Line::from(Span::styled(
            "Top correlations:",
            Style::default().fg(Color::DarkGray),
        )));
        for (name, corr) in correlations.into_iter().take(5) {
            let color = if *corr >= 0.0 { Color::Green } else { Color::Red };
            lines.push(importance_bar(name, corr.abs(), color));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn importance_bar(name: &str, weight: f64, color: Color) -> Line<'static> {
    let width = (weight.clamp(0.0, 1.0) * 16.0).round() as usize;
    Line::from(vec![
        Span::styled(
            format!("  {:<16}", truncated(name, 16)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled("█".repeat(width.max(1)), Style::default().fg(color)),
        Span::styled(
            format!(" {:.1}%", weight * 100.0),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn truncated(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…", &s[..max.saturating_sub(1)])
    }
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState, detail: &SymbolDetail) {
    let block = Block::default()
        .title(" Historical Data (↑/↓ to scroll) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    let header = format!(
        "{:<12}{:>9}{:>9}{:>9}{:>9}{:>13}{:>9}  {:<6}",
        "Date", "Open", "High", "Low", "Close", "Volume", "Returns", "Signal"
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            header,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ))),
        Rect { height: 1, ..inner },
    );

    // Newest rows first, over a window of the most recent bars.
    let window_start = detail.data.len().saturating_sub(state.table_rows);
    let mut rows: Vec<&Bar> = detail.data[window_start..].iter().collect();
    rows.reverse();

    let visible = inner.height.saturating_sub(1) as usize;
    let offset = state.analysis.table_scroll.min(rows.len().saturating_sub(1));
    for (i, bar) in rows.iter().skip(offset).take(visible).enumerate() {
        let opt = |v: Option<f64>| match v {
            Some(x) => format!("{:.2}", x),
            None => "N/A".to_string(),
        };
        let returns = match bar.returns {
            Some(r) => format!("{:+.2}%", r * 100.0),
            None => "N/A".to_string(),
        };
        let returns_color = match bar.returns {
            Some(r) if r < 0.0 => Color::Red,
            Some(_) => Color::Green,
            None => Color::DarkGray,
        };
        let (signal_label, signal_color) = match bar.signal_kind() {
            Some(kind) => (
                kind.label(),
                match kind {
                    crate::model::bar::SignalKind::Buy => Color::Green,
                    crate::model::bar::SignalKind::Sell => Color::Red,
                    crate::model::bar::SignalKind::Hold => Color::DarkGray,
                },
            ),
            None => ("", Color::DarkGray),
        };
        let row = Line::from(vec![
            Span::styled(
                format!(
                    "{:<12}{:>9}{:>9}{:>9}{:>9.2}{:>13}",
                    bar.date,
                    opt(bar.open),
                    opt(bar.high),
                    opt(bar.low),
                    bar.close,
                    bar.volume
                        .map(|v| format!("{:.0}", v))
                        .unwrap_or_else(|| "N/A".to_string()),
                ),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(format!("{:>9}", returns), Style::default().fg(returns_color)),
            Span::styled(
                format!("  {:<6}", signal_label),
                Style::default().fg(signal_color),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(row),
            Rect {
                y: inner.y + 1 + i as u16,
                height: 1,
                ..inner
            },
        );
    }
}

fn render_comparison(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(comparison) = state.analysis.comparison.loaded() else {
        return;
    };
    let block = Block::default()
        .title(" Multi-Symbol Comparison ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut symbols: Vec<&String> = comparison.comparison_data.keys().collect();
    symbols.sort();

    let mut lines = Vec::new();
    for symbol in &symbols {
        let series = &comparison.comparison_data[*symbol];
        let performance = series.normalized.last().copied().unwrap_or(0.0);
        let color = if performance >= 0.0 { Color::Green } else { Color::Red };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", symbol), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:+.2}% over the window", performance),
                Style::default().fg(color),
            ),
            Span::styled(
                format!("  ({} sessions)", series.dates.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    // Upper triangle of the correlation matrix.
    let mut pairs = Vec::new();
    for (i, a) in symbols.iter().enumerate() {
        for b in symbols.iter().skip(i + 1) {
            if let Some(r) = comparison
                .correlation_matrix
                .get(*a)
                .and_then(|row| row.get(*b))
            {
                pairs.push(format!("{}×{} {:+.2}", a, b, r));
            }
        }
    }
    if !pairs.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Correlation: ", Style::default().fg(Color::DarkGray)),
            Span::styled(pairs.join("   "), Style::default().fg(Color::Gray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
