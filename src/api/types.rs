use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::bar::Bar;

/// Payload of `GET /time-range/{symbol}?range={token}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeRangeResponse {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub data: Vec<Bar>,
    #[serde(default)]
    pub total_records: u64,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

/// Payload of `GET /symbol/{symbol}`: the full per-day record set plus the
/// server-computed statistics block and, when the backend had enough history
/// to train on, a prediction block.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolDetail {
    pub symbol: String,
    #[serde(default)]
    pub data: Vec<Bar>,
    pub statistics: Statistics,
    #[serde(default)]
    pub prediction: Option<Prediction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Statistics {
    pub total_records: u64,
    pub date_range: DateRange,
    pub price_stats: PriceStats,
    pub returns_stats: ReturnsStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceStats {
    pub current: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReturnsStats {
    /// Cumulative return over the record set, already in percent.
    pub total_return: f64,
    pub avg_daily_return: f64,
    pub volatility: f64,
    pub sharpe_ratio: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub current_price: f64,
    pub predicted_price: f64,
    pub predicted_change_percent: f64,
    pub best_model: String,
    #[serde(default)]
    pub model_metrics: Option<ModelScore>,
    /// Per-model metrics keyed by model name.
    #[serde(default)]
    pub all_models: HashMap<String, ModelScore>,
    pub accuracy: f64,
    /// "High" / "Medium" / "Low", as labelled by the backend.
    pub confidence: String,
    pub prediction_basis: PredictionBasis,
    pub days_ahead: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelScore {
    pub test_r2: f64,
    pub cv_r2: f64,
    pub rmse: f64,
    pub mae: f64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionBasis {
    #[serde(default)]
    pub model: String,
    pub features_used: u32,
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub training_samples: u64,
    #[serde(default)]
    pub test_samples: u64,
    pub cross_validation_folds: u32,
    #[serde(default)]
    pub top_features: HashMap<String, f64>,
    #[serde(default)]
    pub top_correlations: HashMap<String, f64>,
}

/// Body of `POST /compare`. Built only through [`CompareRequest::from_symbols`]
/// so the fewer-than-two guard cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareRequest {
    pub symbols: Vec<String>,
}

impl CompareRequest {
    /// Deduplicate while preserving first-seen order; `None` when fewer than
    /// two distinct symbols remain (the caller must not issue a request).
    pub fn from_symbols(symbols: &[String]) -> Option<Self> {
        let mut distinct: Vec<String> = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let s = symbol.trim();
            if s.is_empty() {
                continue;
            }
            if !distinct.iter().any(|seen| seen == s) {
                distinct.push(s.to_string());
            }
        }
        if distinct.len() < 2 {
            return None;
        }
        Some(CompareRequest { symbols: distinct })
    }
}

/// Payload of `POST /compare`, keyed by symbol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComparisonResponse {
    #[serde(default)]
    pub comparison_data: HashMap<String, ComparisonSeries>,
    #[serde(default)]
    pub correlation_matrix: HashMap<String, HashMap<String, f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComparisonSeries {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub prices: Vec<f64>,
    /// Percent gain/loss relative to the first close in the window.
    #[serde(default)]
    pub normalized: Vec<f64>,
    #[serde(default)]
    pub returns: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_request_requires_two_distinct_symbols() {
        assert_eq!(CompareRequest::from_symbols(&[]), None);
        assert_eq!(
            CompareRequest::from_symbols(&["THYAO".to_string()]),
            None
        );
        assert_eq!(
            CompareRequest::from_symbols(&["THYAO".to_string(), "THYAO".to_string()]),
            None
        );
    }

    #[test]
    fn compare_request_preserves_order_and_dedupes() {
        let req = CompareRequest::from_symbols(&[
            "GARAN".to_string(),
            "AKBNK".to_string(),
            "GARAN".to_string(),
        ])
        .unwrap();
        assert_eq!(req.symbols, vec!["GARAN", "AKBNK"]);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "symbols": ["GARAN", "AKBNK"] })
        );
    }

    #[test]
    fn symbol_detail_parses_without_prediction() {
        let raw = r#"{
            "symbol": "THYAO",
            "data": [{"date": "2024-01-02", "close": 250.0, "volume": 1000.0}],
            "statistics": {
                "total_records": 1,
                "date_range": {"start": "2024-01-02", "end": "2024-01-02"},
                "price_stats": {"current": 250.0, "min": 250.0, "max": 250.0, "mean": 250.0, "std": 0.0},
                "returns_stats": {"total_return": 0.0, "avg_daily_return": 0.0, "volatility": 0.0, "sharpe_ratio": 0.0}
            }
        }"#;
        let detail: SymbolDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.symbol, "THYAO");
        assert!(detail.prediction.is_none());
        assert_eq!(detail.statistics.total_records, 1);
    }
}
