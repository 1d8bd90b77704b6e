use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tokio::sync::mpsc;

use forsight::api::rest::ApiClient;
use forsight::config::Config;
use forsight::error::FetchError;
use forsight::event::{AnalysisSnapshot, AppEvent, FetchSlot, FetchState};
use forsight::input::{
    parse_analysis_command, parse_chart_command, parse_editor_command, parse_nav_command,
    parse_operations_command, AnalysisCommand, ChartCommand, EditorCommand, NavCommand,
    OperationsCommand,
};
use forsight::model::range::{RangeToken, ANALYSIS_RANGES, CHART_RANGES};
use forsight::nav::{transition, NavAction, View};
use forsight::ui::{self, operations::selected_operation, AppState};

fn spawn_fetch_symbols(client: &Arc<ApiClient>, tx: &mpsc::Sender<AppEvent>, token: u64) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.symbols().await;
        let _ = tx.send(AppEvent::SymbolsLoaded { token, result }).await;
    });
}

fn spawn_fetch_chart_series(
    client: &Arc<ApiClient>,
    tx: &mpsc::Sender<AppEvent>,
    token: u64,
    symbol: String,
    range: RangeToken,
) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.time_range(&symbol, range).await;
        let _ = tx.send(AppEvent::ChartSeriesLoaded { token, result }).await;
    });
}

/// The analysis workspace joins the ranged series and the full detail
/// payload into one snapshot, like the original view did with its two
/// sequential fetches.
fn spawn_fetch_analysis(
    client: &Arc<ApiClient>,
    tx: &mpsc::Sender<AppEvent>,
    token: u64,
    symbol: String,
    range: RangeToken,
) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result: Result<AnalysisSnapshot, FetchError> = async {
            let range_body = client.time_range(&symbol, range).await?;
            let detail = client.symbol_detail(&symbol).await?;
            Ok(AnalysisSnapshot {
                detail,
                range_data: range_body.data,
            })
        }
        .await;
        let _ = tx.send(AppEvent::AnalysisLoaded { token, result }).await;
    });
}

fn spawn_comparison(
    client: &Arc<ApiClient>,
    tx: &mpsc::Sender<AppEvent>,
    token: u64,
    symbols: Vec<String>,
) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        match client.compare(&symbols).await {
            Ok(Some(body)) => {
                let _ = tx
                    .send(AppEvent::ComparisonLoaded {
                        token,
                        result: Ok(body),
                    })
                    .await;
            }
            // Fewer than two distinct symbols: nothing was requested.
            Ok(None) => {
                let _ = tx
                    .send(AppEvent::LogMessage(
                        "Comparison needs at least 2 marked symbols".to_string(),
                    ))
                    .await;
            }
            Err(err) => {
                let _ = tx
                    .send(AppEvent::ComparisonLoaded {
                        token,
                        result: Err(err),
                    })
                    .await;
            }
        }
    });
}

fn refresh_chart_series(state: &mut AppState, client: &Arc<ApiClient>, tx: &mpsc::Sender<AppEvent>) {
    let token = state.ledger.issue(FetchSlot::ChartSeries);
    state.viz.series = FetchState::Loading;
    state.viz.stats = None;
    spawn_fetch_chart_series(
        client,
        tx,
        token,
        state.viz.selected_symbol.clone(),
        state.viz.range,
    );
}

fn refresh_analysis(state: &mut AppState, client: &Arc<ApiClient>, tx: &mpsc::Sender<AppEvent>) {
    let Some(symbol) = state.nav.symbol.clone() else {
        return;
    };
    let token = state.ledger.issue(FetchSlot::AnalysisSnapshot);
    state.analysis.snapshot = FetchState::Loading;
    spawn_fetch_analysis(client, tx, token, symbol, state.analysis.range);
}

fn handle_nav_command(cmd: NavCommand, state: &mut AppState) {
    let action = match cmd {
        NavCommand::Home => NavAction::GoTo(View::Home),
        NavCommand::Demos => NavAction::GoTo(View::Demos),
        NavCommand::Docs => NavAction::GoTo(View::Docs),
        NavCommand::About => NavAction::GoTo(View::About),
        NavCommand::Contact => NavAction::GoTo(View::Contact),
        NavCommand::StartAnalysis => NavAction::StartAnalysis,
        NavCommand::OpenSymbolAnalysis => NavAction::OpenSymbolAnalysis,
        NavCommand::Back => NavAction::Back,
    };
    let previous_view = state.nav.view;
    state.nav = transition(&state.nav, action);
    if state.nav.view != previous_view {
        tracing::info!(from = ?previous_view, to = ?state.nav.view, "navigated");
    }
}

fn handle_operations_command(
    cmd: OperationsCommand,
    state: &mut AppState,
    client: &Arc<ApiClient>,
    tx: &mpsc::Sender<AppEvent>,
) {
    match cmd {
        OperationsCommand::Up => {
            state.operation_index = state.operation_index.saturating_sub(1);
        }
        OperationsCommand::Down => {
            state.operation_index =
                (state.operation_index + 1).min(state.operations.len().saturating_sub(1));
        }
        OperationsCommand::Select => {
            if let Some(op) = selected_operation(state) {
                state.nav = transition(&state.nav, NavAction::SelectOperation(op.clone()));
                state.push_log(format!("Opened {}", op.title));
                refresh_chart_series(state, client, tx);
            }
        }
    }
}

fn handle_chart_command(
    cmd: ChartCommand,
    state: &mut AppState,
    client: &Arc<ApiClient>,
    tx: &mpsc::Sender<AppEvent>,
) {
    match cmd {
        ChartCommand::EditSymbol => {
            state.viz.input = state.viz.selected_symbol.clone();
            state.viz.suggestion_index = 0;
            state.viz.editing = true;
        }
        ChartCommand::NextRange => {
            state.viz.range = state.viz.range.cycle(&CHART_RANGES, 1);
            refresh_chart_series(state, client, tx);
        }
        ChartCommand::PrevRange => {
            state.viz.range = state.viz.range.cycle(&CHART_RANGES, -1);
            refresh_chart_series(state, client, tx);
        }
        ChartCommand::CycleChartKind => {
            state.viz.chart_kind = state.viz.chart_kind.next();
        }
        ChartCommand::Refresh => refresh_chart_series(state, client, tx),
    }
}

fn handle_analysis_command(
    cmd: AnalysisCommand,
    state: &mut AppState,
    client: &Arc<ApiClient>,
    tx: &mpsc::Sender<AppEvent>,
) {
    match cmd {
        AnalysisCommand::EditSearch => {
            state.analysis.query.clear();
            state.analysis.suggestion_index = 0;
            state.analysis.editing = true;
        }
        AnalysisCommand::NextRange => {
            state.analysis.range = state.analysis.range.cycle(&ANALYSIS_RANGES, 1);
            refresh_analysis(state, client, tx);
        }
        AnalysisCommand::PrevRange => {
            state.analysis.range = state.analysis.range.cycle(&ANALYSIS_RANGES, -1);
            refresh_analysis(state, client, tx);
        }
        AnalysisCommand::CycleDerivedSeries => {
            state.analysis.derived_series = state.analysis.derived_series.next();
        }
        AnalysisCommand::ToggleComparePick => {
            if let Some(symbol) = state.nav.symbol.clone() {
                state.analysis.toggle_compare_pick(&symbol);
                state.push_log(format!(
                    "Comparison marks: {}",
                    if state.analysis.compare_picks.is_empty() {
                        "none".to_string()
                    } else {
                        state.analysis.compare_picks.join(", ")
                    }
                ));
            }
        }
        AnalysisCommand::RunComparison => {
            if state.analysis.compare_picks.len() < 2 {
                state.push_log("Comparison needs at least 2 marked symbols".to_string());
                return;
            }
            let token = state.ledger.issue(FetchSlot::Comparison);
            state.analysis.comparison = FetchState::Loading;
            spawn_comparison(client, tx, token, state.analysis.compare_picks.clone());
        }
        AnalysisCommand::TableUp => {
            state.analysis.table_scroll = state.analysis.table_scroll.saturating_sub(1);
        }
        AnalysisCommand::TableDown => {
            state.analysis.table_scroll = state.analysis.table_scroll.saturating_add(1);
        }
    }
}

/// Text-entry handling for both symbol inputs. While a field has focus the
/// editor owns every key, so typed letters cannot trigger navigation.
fn handle_editor_command(
    cmd: EditorCommand,
    state: &mut AppState,
    client: &Arc<ApiClient>,
    tx: &mpsc::Sender<AppEvent>,
) {
    match state.nav.view {
        View::Visualization => {
            let suggestions = state.viz_suggestions();
            match cmd {
                EditorCommand::Insert(c) => {
                    // Symbols are upper-case tickers; normalize as you type.
                    state.viz.input.push(c.to_ascii_uppercase());
                    state.viz.suggestion_index = 0;
                }
                EditorCommand::Backspace => {
                    state.viz.input.pop();
                    state.viz.suggestion_index = 0;
                }
                EditorCommand::SuggestionUp => {
                    state.viz.suggestion_index = state.viz.suggestion_index.saturating_sub(1);
                }
                EditorCommand::SuggestionDown => {
                    if !suggestions.is_empty() {
                        state.viz.suggestion_index =
                            (state.viz.suggestion_index + 1).min(suggestions.len() - 1);
                    }
                }
                EditorCommand::Submit => {
                    let chosen = suggestions
                        .get(state.viz.suggestion_index)
                        .cloned()
                        .unwrap_or_else(|| state.viz.input.trim().to_string());
                    state.viz.editing = false;
                    if !chosen.is_empty() {
                        state.viz.selected_symbol = chosen;
                        refresh_chart_series(state, client, tx);
                    }
                }
                EditorCommand::Cancel => {
                    state.viz.editing = false;
                }
            }
        }
        View::SymbolAnalysis => {
            let suggestions = state.analysis_suggestions();
            match cmd {
                EditorCommand::Insert(c) => {
                    state.analysis.query.push(c);
                    state.analysis.suggestion_index = 0;
                }
                EditorCommand::Backspace => {
                    state.analysis.query.pop();
                    state.analysis.suggestion_index = 0;
                }
                EditorCommand::SuggestionUp => {
                    state.analysis.suggestion_index =
                        state.analysis.suggestion_index.saturating_sub(1);
                }
                EditorCommand::SuggestionDown => {
                    if !suggestions.is_empty() {
                        state.analysis.suggestion_index =
                            (state.analysis.suggestion_index + 1).min(suggestions.len() - 1);
                    }
                }
                EditorCommand::Submit => {
                    let chosen = suggestions
                        .get(state.analysis.suggestion_index)
                        .cloned()
                        .unwrap_or_else(|| state.analysis.query.trim().to_uppercase());
                    state.analysis.editing = false;
                    if !chosen.is_empty() {
                        state.nav = transition(&state.nav, NavAction::SelectSymbol(chosen));
                        refresh_analysis(state, client, tx);
                    }
                }
                EditorCommand::Cancel => {
                    state.analysis.editing = false;
                }
            }
        }
        _ => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            eprintln!("Make sure config/default.toml exists (FORSIGHT_API_BASE overrides the API URL)");
            std::process::exit(1);
        }
    };

    // Log to file so the TUI stays clean.
    let log_file = std::fs::File::create("forsight.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        base_url = %config.api.base_url,
        default_symbol = %config.ui.default_symbol,
        "Starting forsight"
    );

    let client = Arc::new(ApiClient::new(
        &config.api.base_url,
        config.api.request_timeout_ms,
    )?);
    let (app_tx, mut app_rx) = mpsc::channel::<AppEvent>(256);

    let mut app_state = AppState::new(
        &config.ui.default_symbol,
        config.ui.default_range_token()?,
        config.ui.suggestion_limit,
        config.ui.catalog_preview_limit,
        config.ui.table_rows,
    );
    app_state.push_log(format!("forsight started | {}", client.base_url()));

    // The symbol catalog is fetched once per session.
    let symbols_token = app_state.ledger.issue(FetchSlot::SymbolCatalog);
    app_state.symbols = FetchState::Loading;
    spawn_fetch_symbols(&client, &app_tx, symbols_token);

    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|frame| ui::render(frame, &app_state))?;

        // Handle input (non-blocking with timeout)
        if crossterm::event::poll(Duration::from_millis(config.ui.refresh_rate_ms))? {
            if let Event::Key(key) = crossterm::event::read()? {
                if key.kind != crossterm::event::KeyEventKind::Press {
                    continue;
                }
                if app_state.is_editing() {
                    if let Some(cmd) = parse_editor_command(&key.code) {
                        handle_editor_command(cmd, &mut app_state, &client, &app_tx);
                    }
                    continue;
                }
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                    tracing::info!("User quit");
                    break;
                }
                // Screen commands take priority over nav-bar keys.
                let consumed = match app_state.nav.view {
                    View::Operations => parse_operations_command(&key.code)
                        .map(|cmd| handle_operations_command(cmd, &mut app_state, &client, &app_tx))
                        .is_some(),
                    View::Visualization => parse_chart_command(&key.code)
                        .map(|cmd| handle_chart_command(cmd, &mut app_state, &client, &app_tx))
                        .is_some(),
                    View::SymbolAnalysis => parse_analysis_command(&key.code)
                        .map(|cmd| handle_analysis_command(cmd, &mut app_state, &client, &app_tx))
                        .is_some(),
                    _ => false,
                };
                if !consumed {
                    if let Some(cmd) = parse_nav_command(&key.code) {
                        handle_nav_command(cmd, &mut app_state);
                    }
                }
            }
        }

        // Drain events from the fetch tasks
        while let Ok(evt) = app_rx.try_recv() {
            app_state.apply(evt);
        }
    }

    ratatui::restore();
    tracing::info!("Shutdown complete");
    println!("Goodbye! Check forsight.log for details.");
    Ok(())
}
