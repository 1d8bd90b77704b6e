use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

/// How the series is drawn. Mirrors the three chart modes of the web
/// dashboard this replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Area,
    Bar,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Area => "Area",
            ChartKind::Bar => "Bar",
        }
    }

    pub fn next(&self) -> ChartKind {
        match self {
            ChartKind::Line => ChartKind::Area,
            ChartKind::Area => ChartKind::Bar,
            ChartKind::Bar => ChartKind::Line,
        }
    }
}

/// Cell-grid chart for one numeric series. Values are bucketed down to the
/// pane width, so decade-long windows still keep their overall shape.
pub struct SeriesChart<'a> {
    title: String,
    values: &'a [f64],
    dates: Vec<&'a str>,
    kind: ChartKind,
    color: Color,
    /// Horizontal guide lines drawn at fixed values (e.g. z-score bands).
    guides: Vec<(f64, Color)>,
}

impl<'a> SeriesChart<'a> {
    pub fn new(title: impl Into<String>, values: &'a [f64]) -> Self {
        Self {
            title: title.into(),
            values,
            dates: Vec::new(),
            kind: ChartKind::Line,
            color: Color::Cyan,
            guides: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Dates aligned index-for-index with the values; first and last label
    /// the x-axis.
    pub fn dates(mut self, dates: Vec<&'a str>) -> Self {
        self.dates = dates;
        self
    }

    pub fn guide(mut self, value: f64, color: Color) -> Self {
        self.guides.push((value, color));
        self
    }
}

/// Reduce a series to `width` points, keeping the last value of each bucket
/// (closes are end-of-bucket values by nature).
fn bucket_indices(len: usize, width: usize) -> Vec<usize> {
    if len == 0 || width == 0 {
        return Vec::new();
    }
    if len <= width {
        return (0..len).collect();
    }
    (1..=width)
        .map(|i| (i * len / width).saturating_sub(1))
        .collect()
}

impl Widget for SeriesChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.values.is_empty() || inner.height < 3 || inner.width < 6 {
            return;
        }

        let chart_height = inner.height.saturating_sub(1) as usize; // x-axis label row
        let chart_width = inner.width as usize;

        let indices = bucket_indices(self.values.len(), chart_width);
        let visible: Vec<f64> = indices.iter().map(|&i| self.values[i]).collect();

        let mut min_val = f64::INFINITY;
        let mut max_val = f64::NEG_INFINITY;
        for &v in &visible {
            min_val = min_val.min(v);
            max_val = max_val.max(v);
        }
        for &(guide, _) in &self.guides {
            min_val = min_val.min(guide);
            max_val = max_val.max(guide);
        }
        let range = max_val - min_val;
        let range = if range.abs() < 1e-9 { 1.0 } else { range };

        let row_for = |value: f64| -> usize {
            let normalized = ((value - min_val) / range).clamp(0.0, 1.0);
            chart_height - 1 - ((normalized * (chart_height - 1) as f64).round() as usize)
                .min(chart_height - 1)
        };

        // Guide lines under the series marks.
        for &(guide, color) in &self.guides {
            let y = inner.y + row_for(guide) as u16;
            for x in inner.x..inner.x + inner.width {
                buf.set_string(x, y, "┄", Style::default().fg(color));
            }
        }

        for (i, &value) in visible.iter().enumerate() {
            let x = inner.x + i as u16;
            if x >= inner.x + inner.width {
                break;
            }
            let top_row = row_for(value);
            let y = inner.y + top_row as u16;
            match self.kind {
                ChartKind::Line => {
                    buf.set_string(x, y, "●", Style::default().fg(self.color));
                }
                ChartKind::Area => {
                    buf.set_string(x, y, "▄", Style::default().fg(self.color));
                    for fill_row in (top_row + 1)..chart_height {
                        buf.set_string(
                            x,
                            inner.y + fill_row as u16,
                            "░",
                            Style::default().fg(self.color),
                        );
                    }
                }
                ChartKind::Bar => {
                    for fill_row in top_row..chart_height {
                        buf.set_string(
                            x,
                            inner.y + fill_row as u16,
                            "█",
                            Style::default().fg(self.color),
                        );
                    }
                }
            }
        }

        // y-axis extremes
        let label_style = Style::default().fg(Color::DarkGray);
        buf.set_string(inner.x, inner.y, format!("{:.2}", max_val), label_style);
        buf.set_string(
            inner.x,
            inner.y + chart_height.saturating_sub(1) as u16,
            format!("{:.2}", min_val),
            label_style,
        );

        // x-axis: first and last visible dates
        let axis_y = inner.y + inner.height - 1;
        if let (Some(first_idx), Some(last_idx)) = (indices.first(), indices.last()) {
            if let Some(first) = self.dates.get(*first_idx) {
                buf.set_string(inner.x, axis_y, *first, label_style);
            }
            if let Some(last) = self.dates.get(*last_idx) {
                let w = last.len() as u16;
                if inner.width > w {
                    buf.set_string(inner.x + inner.width - w, axis_y, *last, label_style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_kind_cycles_through_all_three() {
        assert_eq!(ChartKind::Line.next(), ChartKind::Area);
        assert_eq!(ChartKind::Area.next(), ChartKind::Bar);
        assert_eq!(ChartKind::Bar.next(), ChartKind::Line);
    }

    #[test]
    fn bucketing_keeps_short_series_intact() {
        assert_eq!(bucket_indices(4, 10), vec![0, 1, 2, 3]);
    }

    #[test]
    fn bucketing_downsamples_to_width_and_ends_on_last_point() {
        let indices = bucket_indices(1000, 80);
        assert_eq!(indices.len(), 80);
        assert_eq!(*indices.last().unwrap(), 999);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bucketing_handles_degenerate_sizes() {
        assert!(bucket_indices(0, 80).is_empty());
        assert!(bucket_indices(10, 0).is_empty());
    }
}
