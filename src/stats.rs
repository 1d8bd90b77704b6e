use crate::model::bar::Bar;

/// Direction of the most recent change in closing value. A flat close
/// classifies as `Up`; that tie-break lives here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

/// Display statistics recomputed from scratch on every fetch. Never cached,
/// never persisted; a new series replaces the whole record.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedStats {
    pub current_value: f64,
    pub previous_value: f64,
    pub change: f64,
    /// `None` when the previous close is zero (division guard).
    pub change_percent: Option<f64>,
    pub trend: Trend,
    pub average_volume: f64,
    /// Root-mean-square of daily returns over the window, in percent.
    /// Not annualized; the scale is part of the display contract.
    pub volatility: f64,
    pub data_points: usize,
}

/// Compute display statistics for a series. Returns `None` on an empty
/// series so callers render a no-data affordance instead of zeroed stats.
/// A single-bar series reuses the current close as the previous close,
/// which pins change to zero.
pub fn derive_stats(bars: &[Bar]) -> Option<DerivedStats> {
    let last = bars.last()?;
    let current_value = last.close;
    let previous_value = if bars.len() >= 2 {
        bars[bars.len() - 2].close
    } else {
        current_value
    };

    let change = current_value - previous_value;
    let change_percent = if previous_value == 0.0 {
        None
    } else {
        Some(change / previous_value * 100.0)
    };
    let trend = if change >= 0.0 { Trend::Up } else { Trend::Down };

    let average_volume =
        bars.iter().map(|b| b.volume.unwrap_or(0.0)).sum::<f64>() / bars.len() as f64;

    let returns = daily_returns(bars);
    let volatility =
        (returns.iter().map(|r| r * r).sum::<f64>() / returns.len() as f64).sqrt() * 100.0;

    Some(DerivedStats {
        current_value,
        previous_value,
        change,
        change_percent,
        trend,
        average_volume,
        volatility,
        data_points: bars.len(),
    })
}

/// Day-over-day simple returns; the leading element is pinned to zero so the
/// vector stays aligned with the bar sequence.
pub fn daily_returns(bars: &[Bar]) -> Vec<f64> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            if i == 0 {
                0.0
            } else {
                let prev = bars[i - 1].close;
                if prev == 0.0 {
                    0.0
                } else {
                    (bar.close - prev) / prev
                }
            }
        })
        .collect()
}
