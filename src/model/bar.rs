use chrono::NaiveDate;
use serde::Deserialize;

/// One OHLCV observation for a symbol on a calendar day, plus whatever
/// derived columns the API chose to attach. Only `date` and `close` are
/// guaranteed; the server synthesizes `open` from `close` when the source
/// table lacks it, and the derived fields are present only on the full
/// symbol payload, not on range queries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Bar {
    pub date: String,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub returns: Option<f64>,
    #[serde(default)]
    pub cumulative_returns: Option<f64>,
    #[serde(default)]
    pub ma_20: Option<f64>,
    #[serde(default)]
    pub ma_50: Option<f64>,
    #[serde(default)]
    pub ma_200: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
    #[serde(default)]
    pub z_score: Option<f64>,
    #[serde(default)]
    pub normalized_price: Option<f64>,
    #[serde(default)]
    pub signal: Option<f64>,
}

/// Moving-average crossover stance as labelled by the API (-1/0/1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Buy,
    Sell,
    Hold,
}

impl SignalKind {
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
            SignalKind::Hold => "HOLD",
        }
    }
}

impl Bar {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// The API serializes the signal column as a number; anything positive is
    /// a buy stance, anything negative a sell.
    pub fn signal_kind(&self) -> Option<SignalKind> {
        self.signal.map(|v| {
            if v > 0.0 {
                SignalKind::Buy
            } else if v < 0.0 {
                SignalKind::Sell
            } else {
                SignalKind::Hold
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, close: f64) -> Bar {
        Bar {
            date: date.to_string(),
            close,
            ..Bar::default()
        }
    }

    #[test]
    fn parses_calendar_dates() {
        let b = bar("2024-01-02", 10.0);
        let d = b.parsed_date().unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert!(bar("02/01/2024", 10.0).parsed_date().is_none());
    }

    #[test]
    fn signal_kind_maps_sign_to_stance() {
        let mut b = bar("2024-01-02", 10.0);
        assert_eq!(b.signal_kind(), None);
        b.signal = Some(1.0);
        assert_eq!(b.signal_kind(), Some(SignalKind::Buy));
        b.signal = Some(-1.0);
        assert_eq!(b.signal_kind(), Some(SignalKind::Sell));
        b.signal = Some(0.0);
        assert_eq!(b.signal_kind(), Some(SignalKind::Hold));
    }

    #[test]
    fn deserializes_sparse_api_rows() {
        let raw = r#"{"date":"2024-03-08","close":251.5,"volume":120000,"signal":-1.0}"#;
        let b: Bar = serde_json::from_str(raw).unwrap();
        assert_eq!(b.date, "2024-03-08");
        assert!(b.open.is_none());
        assert_eq!(b.signal_kind(), Some(SignalKind::Sell));
    }
}
