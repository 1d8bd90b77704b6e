pub mod analysis;
pub mod chart;
pub mod dashboard;
pub mod home;
pub mod operations;
pub mod pages;
pub mod visualization;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::api::types::ComparisonResponse;
use crate::event::{AnalysisSnapshot, AppEvent, FetchSlot, FetchState, RequestLedger};
use crate::model::bar::Bar;
use crate::model::range::RangeToken;
use crate::nav::{NavState, View};
use crate::operation_catalog::OperationCatalog;
use crate::stats::{derive_stats, DerivedStats};
use crate::symbols::SymbolCatalog;
use chart::ChartKind;
use dashboard::{HeaderBar, KeybindBar, LogPanel};

const MAX_LOG_MESSAGES: usize = 200;

/// Which derived column the analysis workspace charts next to the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedSeries {
    Returns,
    ZScore,
    NormalizedPrice,
    RollingVolatility,
}

impl DerivedSeries {
    pub fn label(&self) -> &'static str {
        match self {
            DerivedSeries::Returns => "Daily Returns",
            DerivedSeries::ZScore => "Z-Score (Price Deviation)",
            DerivedSeries::NormalizedPrice => "Normalized Price",
            DerivedSeries::RollingVolatility => "Rolling Volatility (20-day)",
        }
    }

    pub fn next(&self) -> DerivedSeries {
        match self {
            DerivedSeries::Returns => DerivedSeries::ZScore,
            DerivedSeries::ZScore => DerivedSeries::NormalizedPrice,
            DerivedSeries::NormalizedPrice => DerivedSeries::RollingVolatility,
            DerivedSeries::RollingVolatility => DerivedSeries::Returns,
        }
    }
}

/// Chart-workspace state (the "visualization" screen).
#[derive(Debug)]
pub struct VizState {
    pub selected_symbol: String,
    /// Text field contents while the symbol input has focus.
    pub input: String,
    pub editing: bool,
    pub suggestion_index: usize,
    pub range: RangeToken,
    pub chart_kind: ChartKind,
    pub series: FetchState<Vec<Bar>>,
    /// Recomputed from the series on every load; never cached across fetches.
    pub stats: Option<DerivedStats>,
}

impl VizState {
    fn new(default_symbol: &str, default_range: RangeToken) -> Self {
        Self {
            selected_symbol: default_symbol.to_string(),
            input: default_symbol.to_string(),
            editing: false,
            suggestion_index: 0,
            range: default_range,
            chart_kind: ChartKind::Area,
            series: FetchState::Idle,
            stats: None,
        }
    }
}

/// Symbol-analysis workspace state.
#[derive(Debug)]
pub struct AnalysisState {
    pub query: String,
    pub editing: bool,
    pub suggestion_index: usize,
    pub range: RangeToken,
    pub snapshot: FetchState<AnalysisSnapshot>,
    pub derived_series: DerivedSeries,
    /// Symbols marked for the next comparison request.
    pub compare_picks: Vec<String>,
    pub comparison: FetchState<ComparisonResponse>,
    pub table_scroll: usize,
}

impl AnalysisState {
    fn new(default_range: RangeToken) -> Self {
        Self {
            query: String::new(),
            editing: false,
            suggestion_index: 0,
            range: default_range,
            snapshot: FetchState::Idle,
            derived_series: DerivedSeries::Returns,
            compare_picks: Vec::new(),
            comparison: FetchState::Idle,
            table_scroll: 0,
        }
    }

    pub fn toggle_compare_pick(&mut self, symbol: &str) {
        if let Some(pos) = self.compare_picks.iter().position(|s| s == symbol) {
            self.compare_picks.remove(pos);
        } else {
            self.compare_picks.push(symbol.to_string());
        }
    }
}

pub struct AppState {
    pub nav: NavState,
    pub operations: OperationCatalog,
    /// Cursor position in the operations list (flattened category order).
    pub operation_index: usize,
    pub symbols: FetchState<SymbolCatalog>,
    pub viz: VizState,
    pub analysis: AnalysisState,
    pub ledger: RequestLedger,
    pub log_messages: Vec<String>,
    pub suggestion_limit: usize,
    pub catalog_preview_limit: usize,
    pub table_rows: usize,
}

impl AppState {
    pub fn new(
        default_symbol: &str,
        default_range: RangeToken,
        suggestion_limit: usize,
        catalog_preview_limit: usize,
        table_rows: usize,
    ) -> Self {
        Self {
            nav: NavState::default(),
            operations: OperationCatalog::new(),
            operation_index: 0,
            symbols: FetchState::Idle,
            viz: VizState::new(default_symbol, default_range),
            analysis: AnalysisState::new(default_range),
            ledger: RequestLedger::new(),
            log_messages: Vec::new(),
            suggestion_limit,
            catalog_preview_limit,
            table_rows,
        }
    }

    pub fn push_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_MESSAGES {
            self.log_messages.remove(0);
        }
    }

    pub fn symbol_catalog(&self) -> Option<&SymbolCatalog> {
        self.symbols.loaded()
    }

    /// Dropdown rows for the chart workspace symbol input.
    pub fn viz_suggestions(&self) -> Vec<String> {
        match self.symbol_catalog() {
            Some(catalog) => catalog.filter_limited(&self.viz.input, self.catalog_preview_limit),
            None => Vec::new(),
        }
    }

    /// Search-result rows for the analysis workspace.
    pub fn analysis_suggestions(&self) -> Vec<String> {
        match self.symbol_catalog() {
            Some(catalog) => {
                catalog.filter_limited(&self.analysis.query, self.suggestion_limit)
            }
            None => Vec::new(),
        }
    }

    /// Apply a fetch-task event. Results carry the token they were issued
    /// with; anything that is no longer the latest for its slot is dropped
    /// here, so stale responses can never overwrite newer ones.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::SymbolsLoaded { token, result } => {
                if !self.ledger.is_current(FetchSlot::SymbolCatalog, token) {
                    tracing::debug!(token, "discarding stale symbol catalog response");
                    return;
                }
                match &result {
                    Ok(symbols) => {
                        self.push_log(format!("Symbol catalog loaded ({} symbols)", symbols.len()))
                    }
                    Err(e) => self.push_log(format!("[ERR] symbol catalog: {}", e)),
                }
                self.symbols = FetchState::from_result(result.map(SymbolCatalog::new));
            }
            AppEvent::ChartSeriesLoaded { token, result } => {
                if !self.ledger.is_current(FetchSlot::ChartSeries, token) {
                    tracing::debug!(token, "discarding stale chart series response");
                    return;
                }
                match &result {
                    Ok(body) => self.push_log(format!(
                        "{} {}: {} bars",
                        self.viz.selected_symbol,
                        self.viz.range,
                        body.data.len()
                    )),
                    Err(e) => self.push_log(format!(
                        "[WARN] {} {}: {}",
                        self.viz.selected_symbol, self.viz.range, e
                    )),
                }
                self.viz.series = FetchState::from_result(result.map(|body| body.data));
                self.viz.stats = match self.viz.series.loaded() {
                    Some(bars) => derive_stats(bars),
                    None => None,
                };
            }
            AppEvent::AnalysisLoaded { token, result } => {
                if !self.ledger.is_current(FetchSlot::AnalysisSnapshot, token) {
                    tracing::debug!(token, "discarding stale analysis response");
                    return;
                }
                match &result {
                    Ok(snapshot) => self.push_log(format!(
                        "{}: {} records, prediction {}",
                        snapshot.detail.symbol,
                        snapshot.detail.statistics.total_records,
                        if snapshot.detail.prediction.is_some() {
                            "available"
                        } else {
                            "unavailable"
                        }
                    )),
                    Err(e) => self.push_log(format!("[WARN] analysis: {}", e)),
                }
                self.analysis.table_scroll = 0;
                self.analysis.snapshot = FetchState::from_result(result);
            }
            AppEvent::ComparisonLoaded { token, result } => {
                if !self.ledger.is_current(FetchSlot::Comparison, token) {
                    tracing::debug!(token, "discarding stale comparison response");
                    return;
                }
                match &result {
                    Ok(body) => self.push_log(format!(
                        "Comparison ready ({} symbols)",
                        body.comparison_data.len()
                    )),
                    Err(e) => self.push_log(format!("[WARN] comparison: {}", e)),
                }
                self.analysis.comparison = FetchState::from_result(result);
            }
            AppEvent::LogMessage(msg) => self.push_log(msg),
        }
    }

    pub fn is_editing(&self) -> bool {
        match self.nav.view {
            View::Visualization => self.viz.editing,
            View::SymbolAnalysis => self.analysis.editing,
            _ => false,
        }
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header / nav bar
            Constraint::Min(10),   // active screen
            Constraint::Length(5), // log
            Constraint::Length(1), // keybinds
        ])
        .split(frame.area());

    frame.render_widget(
        HeaderBar {
            view: state.nav.view,
            symbol: state.nav.symbol.as_deref(),
        },
        outer[0],
    );

    match state.nav.view {
        View::Home => home::render(frame, outer[1], state),
        View::Operations => operations::render(frame, outer[1], state),
        View::Visualization => visualization::render(frame, outer[1], state),
        View::SymbolAnalysis => analysis::render(frame, outer[1], state),
        View::Demos | View::Docs | View::About | View::Contact => {
            pages::render(frame, outer[1], state)
        }
    }

    frame.render_widget(LogPanel::new(&state.log_messages), outer[2]);
    frame.render_widget(
        KeybindBar {
            view: state.nav.view,
            editing: state.is_editing(),
        },
        outer[3],
    );
}
