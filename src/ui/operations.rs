use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Operation picker: every catalog entry grouped under its category, with
/// the cursor row highlighted and the selected entry's detail on the right.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(46), Constraint::Length(44)])
        .split(area);

    render_list(frame, columns[0], state);
    render_detail(frame, columns[1], state);
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Analysis Operations ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = Vec::new();
    let mut flat_index = 0usize;
    for category in state.operations.categories() {
        lines.push(Line::from(Span::styled(
            category,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        )));
        for op in state.operations.by_category(category) {
            let selected = flat_index == state.operation_index;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{} ", op.icon), Style::default().fg(op.color)),
                Span::styled(op.title, style),
            ]));
            flat_index += 1;
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_detail(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(op) = selected_operation(state) else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", op.icon), Style::default().fg(op.color)),
            Span::styled(
                op.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(op.category, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(op.description, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    for feature in op.features {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(op.color)),
            Span::styled(*feature, Style::default().fg(Color::Gray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The cursor walks the catalog in category-grouped order, which is the
/// order the list renders in.
pub fn selected_operation(state: &AppState) -> Option<&'static crate::operation_catalog::Operation> {
    let mut flat_index = 0usize;
    for category in state.operations.categories() {
        for op in state.operations.by_category(category) {
            if flat_index == state.operation_index {
                return Some(op);
            }
            flat_index += 1;
        }
    }
    None
}
