use std::collections::HashMap;

use crate::api::types::{ComparisonResponse, SymbolDetail, TimeRangeResponse};
use crate::error::FetchError;

/// Lifecycle of one logical piece of fetched data. `Empty` is deliberately
/// distinct from `Loaded` with an empty payload: views render a no-data
/// affordance for it instead of misleading zeros.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Empty,
    Failed(FetchError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Collapse a fetch result into the state every view consumes uniformly.
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(FetchError::Empty) => FetchState::Empty,
            Err(err) => FetchState::Failed(err),
        }
    }
}

/// One logical destination for an async fetch. Each slot holds at most one
/// "current" request; anything older is stale on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchSlot {
    SymbolCatalog,
    ChartSeries,
    AnalysisSnapshot,
    Comparison,
}

/// Monotonic request tokens per slot. A fetch task carries the token it was
/// issued; on completion the result is applied only if that token is still
/// the latest for its slot, so a slow response for an abandoned symbol/range
/// can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct RequestLedger {
    next: u64,
    latest: HashMap<FetchSlot, u64>,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, slot: FetchSlot) -> u64 {
        self.next += 1;
        self.latest.insert(slot, self.next);
        self.next
    }

    pub fn is_current(&self, slot: FetchSlot, token: u64) -> bool {
        self.latest.get(&slot) == Some(&token)
    }
}

/// The symbol-analysis view joins two endpoint payloads for one selection.
#[derive(Debug, Clone)]
pub struct AnalysisSnapshot {
    pub detail: SymbolDetail,
    /// Bars restricted to the requested range token (the detail payload
    /// carries the full history).
    pub range_data: Vec<crate::model::bar::Bar>,
}

/// Everything the fetch tasks can report back to the UI loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    SymbolsLoaded {
        token: u64,
        result: Result<Vec<String>, FetchError>,
    },
    ChartSeriesLoaded {
        token: u64,
        result: Result<TimeRangeResponse, FetchError>,
    },
    AnalysisLoaded {
        token: u64,
        result: Result<AnalysisSnapshot, FetchError>,
    },
    ComparisonLoaded {
        token: u64,
        result: Result<ComparisonResponse, FetchError>,
    },
    LogMessage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_tokens_increase_and_supersede() {
        let mut ledger = RequestLedger::new();
        let first = ledger.issue(FetchSlot::ChartSeries);
        let second = ledger.issue(FetchSlot::ChartSeries);
        assert!(second > first);
        assert!(!ledger.is_current(FetchSlot::ChartSeries, first));
        assert!(ledger.is_current(FetchSlot::ChartSeries, second));
    }

    #[test]
    fn ledger_slots_are_independent() {
        let mut ledger = RequestLedger::new();
        let chart = ledger.issue(FetchSlot::ChartSeries);
        let analysis = ledger.issue(FetchSlot::AnalysisSnapshot);
        assert!(ledger.is_current(FetchSlot::ChartSeries, chart));
        assert!(ledger.is_current(FetchSlot::AnalysisSnapshot, analysis));
    }

    #[test]
    fn fetch_state_folds_empty_out_of_the_error_path() {
        let state: FetchState<Vec<u8>> = FetchState::from_result(Err(FetchError::Empty));
        assert_eq!(state, FetchState::Empty);
        let state: FetchState<Vec<u8>> =
            FetchState::from_result(Err(FetchError::Status { status: 500 }));
        assert_eq!(state, FetchState::Failed(FetchError::Status { status: 500 }));
    }
}
