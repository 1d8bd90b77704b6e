use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::model::range::RangeToken;
use crate::nav::View;
use crate::stats::{DerivedStats, Trend};

pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    }
}

pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 0.0 => format!("+{:.2}%", v),
        Some(v) => format!("{:.2}%", v),
        None => "---".to_string(),
    }
}

/// Top bar: brand, the landing-page nav links with the active one
/// highlighted, and the get-started hint.
pub struct HeaderBar<'a> {
    pub view: View,
    pub symbol: Option<&'a str>,
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                " ForSight ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", Style::default().fg(Color::DarkGray)),
        ];
        for (label, view) in [
            ("[H]ome", View::Home),
            ("[D]emos", View::Demos),
            ("D[o]cs", View::Docs),
            ("[A]bout", View::About),
            ("[C]ontact", View::Contact),
        ] {
            let style = if self.view == view {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!(" {} ", self.view.title()),
            Style::default().fg(Color::Yellow),
        ));
        if let Some(symbol) = self.symbol {
            spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(symbol, Style::default().fg(Color::Cyan)));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

/// Bottom hint row; contents depend on the active screen.
pub struct KeybindBar {
    pub view: View,
    pub editing: bool,
}

impl Widget for KeybindBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints: &[(&str, &str)] = if self.editing {
            &[
                ("Type", "filter"),
                ("↑/↓", "pick"),
                ("Enter", "select"),
                ("Esc", "cancel"),
            ]
        } else {
            match self.view {
                View::Operations => &[
                    ("↑/↓", "move"),
                    ("Enter", "open"),
                    ("Esc", "back"),
                    ("Q", "quit"),
                ],
                View::Visualization => &[
                    ("/", "symbol"),
                    ("←/→", "range"),
                    ("T", "chart type"),
                    ("R", "refresh"),
                    ("Esc", "back"),
                    ("Q", "quit"),
                ],
                View::SymbolAnalysis => &[
                    ("/", "search"),
                    ("←/→", "range"),
                    ("V", "series"),
                    ("X", "mark"),
                    ("M", "compare"),
                    ("↑/↓", "table"),
                    ("Esc", "back"),
                    ("Q", "quit"),
                ],
                _ => &[
                    ("G", "get started"),
                    ("S", "symbol analysis"),
                    ("H/D/O/A/C", "pages"),
                    ("Q", "quit"),
                ],
            }
        };

        let mut spans = Vec::with_capacity(hints.len() * 2 + 1);
        spans.push(Span::raw(" "));
        for (key, action) in hints {
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::styled(
                format!(" {}  ", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

/// Capped scrollback of user-relevant messages, newest at the bottom.
pub struct LogPanel<'a> {
    messages: &'a [String],
}

impl<'a> LogPanel<'a> {
    pub fn new(messages: &'a [String]) -> Self {
        Self { messages }
    }
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Log ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = inner.height as usize;
        let start = self.messages.len().saturating_sub(visible);
        for (row, msg) in self.messages[start..].iter().enumerate() {
            let style = if msg.starts_with("[ERR]") {
                Style::default().fg(Color::Red)
            } else if msg.starts_with("[WARN]") {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            buf.set_stringn(inner.x, inner.y + row as u16, msg, inner.width as usize, style);
        }
    }
}

/// The four stat cards of the chart workspace, driven by the client-side
/// derived statistics.
pub struct StatCardsPanel<'a> {
    pub stats: &'a DerivedStats,
    pub range: RangeToken,
}

impl Widget for StatCardsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
            ])
            .split(area);

        let trend = self.stats.trend;
        let change_pct = format_percent(self.stats.change_percent);

        render_card(
            cards[0],
            buf,
            "Current Value",
            format!("{} {:.2}", trend.arrow(), self.stats.current_value),
            change_pct.clone(),
            trend_color(trend),
        );
        render_card(
            cards[1],
            buf,
            "Daily Change",
            format!("{:+.2}", self.stats.change),
            change_pct,
            Color::Blue,
        );
        render_card(
            cards[2],
            buf,
            "Avg Volume",
            format!("{:.0}", self.stats.average_volume),
            format!("{} points", self.stats.data_points),
            Color::Magenta,
        );
        render_card(
            cards[3],
            buf,
            "Volatility",
            format!("{:.2}%", self.stats.volatility),
            self.range.as_str().to_string(),
            Color::Yellow,
        );
    }
}

fn render_card(
    area: Rect,
    buf: &mut Buffer,
    label: &str,
    value: String,
    sublabel: String,
    color: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sublabel, Style::default().fg(Color::DarkGray))),
    ];
    Paragraph::new(lines).block(block).render(area, buf);
}

/// No-data affordance with the fallback suggestions the web UI offered.
pub struct EmptyStatePanel<'a> {
    pub message: &'a str,
}

impl Widget for EmptyStatePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" No Data Available ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.message, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(Span::styled(
                "Try: XU100, THYAO, AKBNK",
                Style::default().fg(Color::Cyan),
            )),
        ];
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct LoadingPanel;

impl Widget for LoadingPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Loading data...",
                Style::default().fg(Color::Yellow),
            )),
        ];
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_formatting_signs_and_sentinel() {
        assert_eq!(format_percent(Some(1.5)), "+1.50%");
        assert_eq!(format_percent(Some(-3.25)), "-3.25%");
        assert_eq!(format_percent(Some(0.0)), "+0.00%");
        assert_eq!(format_percent(None), "---");
    }

    #[test]
    fn trend_colors_match_direction() {
        assert_eq!(trend_color(Trend::Up), Color::Green);
        assert_eq!(trend_color(Trend::Down), Color::Red);
    }
}
