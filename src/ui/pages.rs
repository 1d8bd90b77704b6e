use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::nav::View;

/// Static landing pages: demos, docs, about, contact. Content mirrors the
/// original marketing pages in text form; the demo entries route into the
/// same two analysis flows.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (title, lines) = match state.nav.view {
        View::Demos => demos_lines(),
        View::Docs => docs_lines(),
        View::About => about_lines(),
        _ => contact_lines(),
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
}

fn body(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

fn demo_entry(title: &'static str, detail: &'static str, key: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
            Span::styled(
                title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", detail),
            Style::default().fg(Color::Gray),
        )),
    ]
}

fn demos_lines() -> (&'static str, Vec<Line<'static>>) {
    let mut lines = vec![
        heading("Interactive Demos"),
        body("Experience the analytics flows firsthand."),
        Line::from(""),
    ];
    lines.extend(demo_entry(
        "Real-Time Market Analysis",
        "AI-powered BIST analysis with live data · 15 indicators · 1997-2025",
        "S",
    ));
    lines.extend(demo_entry(
        "Predictive Analytics",
        "Multi-model ML predictions · 3 AI models",
        "S",
    ));
    lines.extend(demo_entry(
        "Technical Indicators",
        "Advanced technical analysis suite · 40+ indicators",
        "G",
    ));
    lines.extend(demo_entry(
        "Portfolio Optimization",
        "AI-driven portfolio recommendations · 10 strategies",
        "G",
    ));
    ("Demos", lines)
}

fn docs_lines() -> (&'static str, Vec<Line<'static>>) {
    (
        "Docs",
        vec![
            heading("Getting Started"),
            body("G opens the operation picker; pick an operation to chart a symbol"),
            body("over a time range as a line, area, or bar chart."),
            Line::from(""),
            heading("Symbol Analysis"),
            body("S opens the analysis workspace: search a symbol to load its"),
            body("statistics, prediction, derived series, and historical table."),
            Line::from(""),
            heading("Comparison"),
            body("Mark symbols with X, then M requests a side-by-side comparison"),
            body("(needs at least two distinct marks)."),
            Line::from(""),
            heading("Data"),
            body("All series, statistics and predictions come precomputed from the"),
            body("ForSight API; this client only reshapes and renders them."),
        ],
    )
}

fn about_lines() -> (&'static str, Vec<Line<'static>>) {
    (
        "About",
        vec![
            heading("ForSight Analytics"),
            Line::from(""),
            body("Financial analytics over BIST and global market data: statistical"),
            body("analysis, technical indicators, and multi-model price prediction"),
            body("(Random Forest, Gradient Boosting, Linear Regression, XGBoost)."),
            Line::from(""),
            body("Coverage: 1997-2025, refreshed daily."),
        ],
    )
}

fn contact_lines() -> (&'static str, Vec<Line<'static>>) {
    (
        "Contact",
        vec![
            heading("Get in touch"),
            Line::from(""),
            body("Mail:  hello@forsight.example"),
            body("Web:   https://forsight.example"),
            Line::from(""),
            body("Issues and feature requests are welcome."),
        ],
    )
}
