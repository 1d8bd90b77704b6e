use forsight::nav::{transition, NavAction, NavState, View};
use forsight::operation_catalog::OperationCatalog;

#[test]
/// Verifies the canonical flow: home --start analysis--> operations,
/// then an operation selection opens the chart workspace with the
/// descriptor attached.
fn home_to_operations_to_visualization() {
    let catalog = OperationCatalog::new();
    let home = NavState::default();
    assert_eq!(home.view, View::Home);

    let operations = transition(&home, NavAction::StartAnalysis);
    assert_eq!(operations.view, View::Operations);

    let op = catalog.get_by_id("volatility").unwrap().clone();
    let viz = transition(&operations, NavAction::SelectOperation(op.clone()));
    assert_eq!(viz.view, View::Visualization);
    assert_eq!(viz.operation.as_ref().map(|o| o.id), Some("volatility"));
}

#[test]
/// Verifies back from the chart workspace returns to the picker and clears
/// the operation descriptor.
fn back_from_visualization_clears_operation() {
    let catalog = OperationCatalog::new();
    let operations = transition(&NavState::default(), NavAction::StartAnalysis);
    let viz = transition(
        &operations,
        NavAction::SelectOperation(catalog.get(0).unwrap().clone()),
    );
    let back = transition(&viz, NavAction::Back);
    assert_eq!(back.view, View::Operations);
    assert!(back.operation.is_none());
}

#[test]
/// Verifies the nav bar reaches every landing page from anywhere and wipes
/// in-progress selections on the way.
fn nav_bar_reaches_landing_pages_and_discards_selection() {
    let catalog = OperationCatalog::new();
    let operations = transition(&NavState::default(), NavAction::StartAnalysis);
    let viz = transition(
        &operations,
        NavAction::SelectOperation(catalog.get(3).unwrap().clone()),
    );
    for view in [View::Home, View::Demos, View::Docs, View::About, View::Contact] {
        let landed = transition(&viz, NavAction::GoTo(view));
        assert_eq!(landed.view, view);
        assert!(landed.operation.is_none());
        assert!(landed.symbol.is_none());
    }
}

#[test]
/// Verifies the nav bar cannot address workspace screens directly.
fn nav_bar_ignores_non_landing_targets() {
    let state = NavState::default();
    assert_eq!(transition(&state, NavAction::GoTo(View::Operations)), state);
    assert_eq!(transition(&state, NavAction::GoTo(View::SymbolAnalysis)), state);
}

#[test]
/// Verifies the home shortcut into symbol analysis and that a recorded
/// symbol selection survives until back-out.
fn symbol_analysis_shortcut_and_selection_lifecycle() {
    let analysis = transition(&NavState::default(), NavAction::OpenSymbolAnalysis);
    assert_eq!(analysis.view, View::SymbolAnalysis);

    let picked = transition(&analysis, NavAction::SelectSymbol("THYAO".to_string()));
    assert_eq!(picked.view, View::SymbolAnalysis);
    assert_eq!(picked.symbol.as_deref(), Some("THYAO"));

    let home = transition(&picked, NavAction::Back);
    assert_eq!(home.view, View::Home);
    assert!(home.symbol.is_none());
}

#[test]
/// Verifies operation selection is inert outside the picker screen, so a
/// stray command cannot teleport the UI.
fn select_operation_requires_the_picker() {
    let catalog = OperationCatalog::new();
    let op = catalog.get(0).unwrap().clone();
    for state in [
        NavState::default(),
        transition(&NavState::default(), NavAction::OpenSymbolAnalysis),
        transition(&NavState::default(), NavAction::GoTo(View::Docs)),
    ] {
        assert_eq!(
            transition(&state, NavAction::SelectOperation(op.clone())),
            state
        );
    }
}
