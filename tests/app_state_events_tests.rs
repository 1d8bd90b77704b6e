use forsight::api::types::TimeRangeResponse;
use forsight::error::FetchError;
use forsight::event::{AppEvent, FetchSlot, FetchState};
use forsight::model::bar::Bar;
use forsight::model::range::RangeToken;
use forsight::stats::Trend;
use forsight::ui::AppState;

fn app_state() -> AppState {
    AppState::new("XU100", RangeToken::Y1, 10, 20, 50)
}

fn bar(date: &str, close: f64) -> Bar {
    Bar {
        date: date.to_string(),
        close,
        ..Bar::default()
    }
}

fn series_response(bars: Vec<Bar>) -> TimeRangeResponse {
    TimeRangeResponse {
        symbol: "XU100".to_string(),
        range: "1Y".to_string(),
        total_records: bars.len() as u64,
        data: bars,
        date_range: None,
    }
}

#[test]
/// Verifies a loaded chart series recomputes derived stats in the same
/// apply step, so a render never sees series and stats out of sync.
fn chart_series_load_recomputes_stats() {
    let mut state = app_state();
    let token = state.ledger.issue(FetchSlot::ChartSeries);
    state.apply(AppEvent::ChartSeriesLoaded {
        token,
        result: Ok(series_response(vec![
            bar("2024-01-01", 10.0),
            bar("2024-01-02", 12.0),
        ])),
    });

    let stats = state.viz.stats.as_ref().expect("stats follow the series");
    assert!((stats.change - 2.0).abs() < f64::EPSILON);
    assert_eq!(stats.trend, Trend::Up);
    assert_eq!(state.viz.series.loaded().map(|bars| bars.len()), Some(2));
}

#[test]
/// Verifies the stale-token guard: a slow response for a superseded request
/// must be discarded instead of overwriting the newer one.
fn stale_chart_response_is_discarded() {
    let mut state = app_state();
    let stale = state.ledger.issue(FetchSlot::ChartSeries);
    let current = state.ledger.issue(FetchSlot::ChartSeries);

    state.apply(AppEvent::ChartSeriesLoaded {
        token: current,
        result: Ok(series_response(vec![bar("2024-06-01", 50.0)])),
    });
    state.apply(AppEvent::ChartSeriesLoaded {
        token: stale,
        result: Ok(series_response(vec![bar("2020-01-01", 1.0)])),
    });

    let bars = state.viz.series.loaded().expect("series stays loaded");
    assert_eq!(bars[0].date, "2024-06-01");
    let stats = state.viz.stats.as_ref().unwrap();
    assert!((stats.current_value - 50.0).abs() < f64::EPSILON);
}

#[test]
/// Verifies tokens are per-slot: an old chart token does not invalidate the
/// symbol catalog slot.
fn token_slots_are_independent() {
    let mut state = app_state();
    let _chart = state.ledger.issue(FetchSlot::ChartSeries);
    let catalog_token = state.ledger.issue(FetchSlot::SymbolCatalog);

    state.apply(AppEvent::SymbolsLoaded {
        token: catalog_token,
        result: Ok(vec!["THYAO".to_string(), "AKBNK".to_string()]),
    });
    assert_eq!(state.symbol_catalog().map(|c| c.len()), Some(2));
}

#[test]
/// Verifies the uniform error channel: an empty payload becomes the
/// distinguished Empty state and a transport failure becomes Failed, with
/// no stats left behind from an earlier load.
fn failures_fold_into_uniform_states() {
    let mut state = app_state();
    let token = state.ledger.issue(FetchSlot::ChartSeries);
    state.apply(AppEvent::ChartSeriesLoaded {
        token,
        result: Ok(series_response(vec![bar("2024-01-01", 10.0)])),
    });
    assert!(state.viz.stats.is_some());

    let token = state.ledger.issue(FetchSlot::ChartSeries);
    state.apply(AppEvent::ChartSeriesLoaded {
        token,
        result: Err(FetchError::Empty),
    });
    assert_eq!(state.viz.series, FetchState::Empty);
    assert!(state.viz.stats.is_none());

    let token = state.ledger.issue(FetchSlot::ChartSeries);
    state.apply(AppEvent::ChartSeriesLoaded {
        token,
        result: Err(FetchError::Transport("connection refused".to_string())),
    });
    assert!(matches!(state.viz.series, FetchState::Failed(_)));
}

#[test]
/// Verifies log messages are capped so a chatty session cannot grow the
/// scrollback without bound.
fn log_scrollback_is_capped() {
    let mut state = app_state();
    for i in 0..500 {
        state.apply(AppEvent::LogMessage(format!("msg {}", i)));
    }
    assert_eq!(state.log_messages.len(), 200);
    assert_eq!(state.log_messages.last().unwrap(), "msg 499");
}

#[test]
/// Verifies comparison marks toggle on and off per symbol.
fn compare_picks_toggle() {
    let mut state = app_state();
    state.analysis.toggle_compare_pick("THYAO");
    state.analysis.toggle_compare_pick("AKBNK");
    assert_eq!(state.analysis.compare_picks, vec!["THYAO", "AKBNK"]);
    state.analysis.toggle_compare_pick("THYAO");
    assert_eq!(state.analysis.compare_picks, vec!["AKBNK"]);
}
