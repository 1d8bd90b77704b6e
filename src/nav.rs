use crate::operation_catalog::Operation;

/// Top-level screen currently shown. `Home`, `Demos`, `Docs`, `About`, and
/// `Contact` are landing pages reachable from the persistent nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Operations,
    Visualization,
    SymbolAnalysis,
    Demos,
    Docs,
    About,
    Contact,
}

impl View {
    pub fn is_landing(&self) -> bool {
        matches!(
            self,
            View::Home | View::Demos | View::Docs | View::About | View::Contact
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Operations => "Operations",
            View::Visualization => "Visualization",
            View::SymbolAnalysis => "Symbol Analysis",
            View::Demos => "Demos",
            View::Docs => "Docs",
            View::About => "About",
            View::Contact => "Contact",
        }
    }
}

/// The whole navigation state as one immutable value. Screens never mutate
/// it directly; every change goes through [`transition`].
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub view: View,
    pub operation: Option<Operation>,
    pub symbol: Option<String>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            view: View::Home,
            operation: None,
            symbol: None,
        }
    }
}

/// User-triggered navigation input. There are no timer- or network-driven
/// transitions; fetch completions never touch the nav state.
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    /// The persistent "get started" control: open the operation picker.
    StartAnalysis,
    /// Pick an operation from the catalog (operation screen only).
    SelectOperation(Operation),
    /// Jump straight to the symbol-analysis workspace.
    OpenSymbolAnalysis,
    /// Leave the current screen towards its parent.
    Back,
    /// Nav-bar jump; only landing views are addressable this way.
    GoTo(View),
    /// Record the analysis-workspace symbol selection.
    SelectSymbol(String),
}

/// Pure transition function: `(state, action) -> state`. Unknown or
/// out-of-place actions leave the state unchanged.
pub fn transition(state: &NavState, action: NavAction) -> NavState {
    match action {
        NavAction::StartAnalysis => NavState {
            view: View::Operations,
            operation: None,
            symbol: None,
        },
        NavAction::SelectOperation(operation) => {
            if state.view != View::Operations {
                return state.clone();
            }
            NavState {
                view: View::Visualization,
                operation: Some(operation),
                symbol: state.symbol.clone(),
            }
        }
        NavAction::OpenSymbolAnalysis => NavState {
            view: View::SymbolAnalysis,
            operation: None,
            symbol: state.symbol.clone(),
        },
        NavAction::Back => match state.view {
            View::Visualization => NavState {
                view: View::Operations,
                operation: None,
                symbol: state.symbol.clone(),
            },
            View::Operations => NavState {
                view: View::Home,
                operation: None,
                symbol: state.symbol.clone(),
            },
            View::SymbolAnalysis => NavState {
                view: View::Home,
                operation: None,
                symbol: None,
            },
            _ => NavState {
                view: View::Home,
                ..state.clone()
            },
        },
        NavAction::GoTo(view) => {
            if !view.is_landing() {
                return state.clone();
            }
            NavState {
                view,
                operation: None,
                symbol: None,
            }
        }
        NavAction::SelectSymbol(symbol) => NavState {
            symbol: Some(symbol),
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation_catalog::OperationCatalog;

    #[test]
    fn initial_state_is_home_with_no_selection() {
        let state = NavState::default();
        assert_eq!(state.view, View::Home);
        assert!(state.operation.is_none());
        assert!(state.symbol.is_none());
    }

    #[test]
    fn start_analysis_opens_operations_from_home() {
        let state = transition(&NavState::default(), NavAction::StartAnalysis);
        assert_eq!(state.view, View::Operations);
    }

    #[test]
    fn selecting_an_operation_carries_the_descriptor() {
        let catalog = OperationCatalog::new();
        let op = catalog.get(0).unwrap().clone();
        let operations = transition(&NavState::default(), NavAction::StartAnalysis);
        let viz = transition(&operations, NavAction::SelectOperation(op.clone()));
        assert_eq!(viz.view, View::Visualization);
        assert_eq!(viz.operation, Some(op));
    }

    #[test]
    fn select_operation_outside_operations_screen_is_ignored() {
        let catalog = OperationCatalog::new();
        let op = catalog.get(0).unwrap().clone();
        let state = NavState::default();
        assert_eq!(transition(&state, NavAction::SelectOperation(op)), state);
    }

    #[test]
    fn back_from_visualization_clears_the_operation() {
        let catalog = OperationCatalog::new();
        let op = catalog.get(2).unwrap().clone();
        let operations = transition(&NavState::default(), NavAction::StartAnalysis);
        let viz = transition(&operations, NavAction::SelectOperation(op));
        let back = transition(&viz, NavAction::Back);
        assert_eq!(back.view, View::Operations);
        assert!(back.operation.is_none());
    }

    #[test]
    fn nav_bar_only_addresses_landing_views() {
        let state = NavState::default();
        assert_eq!(transition(&state, NavAction::GoTo(View::Demos)).view, View::Demos);
        assert_eq!(
            transition(&state, NavAction::GoTo(View::Visualization)),
            state
        );
    }

    #[test]
    fn nav_bar_jump_discards_in_progress_selection() {
        let catalog = OperationCatalog::new();
        let op = catalog.get(1).unwrap().clone();
        let operations = transition(&NavState::default(), NavAction::StartAnalysis);
        let mut viz = transition(&operations, NavAction::SelectOperation(op));
        viz = transition(&viz, NavAction::SelectSymbol("THYAO".to_string()));
        let home = transition(&viz, NavAction::GoTo(View::Home));
        assert_eq!(home, NavState::default());
    }

    #[test]
    fn symbol_selection_keeps_the_current_view() {
        let analysis = transition(&NavState::default(), NavAction::OpenSymbolAnalysis);
        let picked = transition(&analysis, NavAction::SelectSymbol("AKBNK".to_string()));
        assert_eq!(picked.view, View::SymbolAnalysis);
        assert_eq!(picked.symbol.as_deref(), Some("AKBNK"));
    }

    #[test]
    fn back_from_symbol_analysis_clears_the_symbol() {
        let analysis = transition(&NavState::default(), NavAction::OpenSymbolAnalysis);
        let picked = transition(&analysis, NavAction::SelectSymbol("AKBNK".to_string()));
        let home = transition(&picked, NavAction::Back);
        assert_eq!(home.view, View::Home);
        assert!(home.symbol.is_none());
    }
}
