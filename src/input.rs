use crossterm::event::KeyCode;

/// Commands available on every screen (the persistent nav bar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Home,
    Demos,
    Docs,
    About,
    Contact,
    StartAnalysis,
    OpenSymbolAnalysis,
    Back,
}

/// Operation-picker screen commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationsCommand {
    Up,
    Down,
    Select,
}

/// Chart-workspace (visualization) screen commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCommand {
    EditSymbol,
    NextRange,
    PrevRange,
    CycleChartKind,
    Refresh,
}

/// Symbol-analysis screen commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisCommand {
    EditSearch,
    NextRange,
    PrevRange,
    CycleDerivedSeries,
    ToggleComparePick,
    RunComparison,
    TableUp,
    TableDown,
}

/// Commands while a text field (symbol input / search box) has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Insert(char),
    Backspace,
    SuggestionUp,
    SuggestionDown,
    Submit,
    Cancel,
}

pub fn parse_nav_command(key_code: &KeyCode) -> Option<NavCommand> {
    match key_code {
        KeyCode::Esc => Some(NavCommand::Back),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'h' => Some(NavCommand::Home),
            'd' => Some(NavCommand::Demos),
            'o' => Some(NavCommand::Docs),
            'a' => Some(NavCommand::About),
            'c' => Some(NavCommand::Contact),
            'g' => Some(NavCommand::StartAnalysis),
            's' => Some(NavCommand::OpenSymbolAnalysis),
            _ => None,
        },
        _ => None,
    }
}

pub fn parse_operations_command(key_code: &KeyCode) -> Option<OperationsCommand> {
    match key_code {
        KeyCode::Up => Some(OperationsCommand::Up),
        KeyCode::Down => Some(OperationsCommand::Down),
        KeyCode::Enter => Some(OperationsCommand::Select),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'k' => Some(OperationsCommand::Up),
            'j' => Some(OperationsCommand::Down),
            _ => None,
        },
        _ => None,
    }
}

pub fn parse_chart_command(key_code: &KeyCode) -> Option<ChartCommand> {
    match key_code {
        KeyCode::Char('/') => Some(ChartCommand::EditSymbol),
        KeyCode::Right | KeyCode::Char(']') => Some(ChartCommand::NextRange),
        KeyCode::Left | KeyCode::Char('[') => Some(ChartCommand::PrevRange),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            't' => Some(ChartCommand::CycleChartKind),
            'r' => Some(ChartCommand::Refresh),
            _ => None,
        },
        _ => None,
    }
}

pub fn parse_analysis_command(key_code: &KeyCode) -> Option<AnalysisCommand> {
    match key_code {
        KeyCode::Char('/') => Some(AnalysisCommand::EditSearch),
        KeyCode::Right | KeyCode::Char(']') => Some(AnalysisCommand::NextRange),
        KeyCode::Left | KeyCode::Char('[') => Some(AnalysisCommand::PrevRange),
        KeyCode::Up | KeyCode::PageUp => Some(AnalysisCommand::TableUp),
        KeyCode::Down | KeyCode::PageDown => Some(AnalysisCommand::TableDown),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'v' => Some(AnalysisCommand::CycleDerivedSeries),
            'x' => Some(AnalysisCommand::ToggleComparePick),
            'm' => Some(AnalysisCommand::RunComparison),
            _ => None,
        },
        _ => None,
    }
}

/// Text-entry mode captures printable keys before any screen command runs,
/// so typing "hd" into a search box cannot navigate away.
pub fn parse_editor_command(key_code: &KeyCode) -> Option<EditorCommand> {
    match key_code {
        KeyCode::Esc => Some(EditorCommand::Cancel),
        KeyCode::Enter => Some(EditorCommand::Submit),
        KeyCode::Backspace => Some(EditorCommand::Backspace),
        KeyCode::Up => Some(EditorCommand::SuggestionUp),
        KeyCode::Down => Some(EditorCommand::SuggestionDown),
        KeyCode::Char(c) => Some(EditorCommand::Insert(*c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_keys_are_case_insensitive() {
        assert_eq!(parse_nav_command(&KeyCode::Char('h')), Some(NavCommand::Home));
        assert_eq!(parse_nav_command(&KeyCode::Char('H')), Some(NavCommand::Home));
        assert_eq!(
            parse_nav_command(&KeyCode::Char('G')),
            Some(NavCommand::StartAnalysis)
        );
        assert_eq!(parse_nav_command(&KeyCode::Esc), Some(NavCommand::Back));
        assert_eq!(parse_nav_command(&KeyCode::Char('z')), None);
    }

    #[test]
    fn editor_mode_captures_printable_chars() {
        assert_eq!(
            parse_editor_command(&KeyCode::Char('h')),
            Some(EditorCommand::Insert('h'))
        );
        assert_eq!(parse_editor_command(&KeyCode::Enter), Some(EditorCommand::Submit));
        assert_eq!(parse_editor_command(&KeyCode::Esc), Some(EditorCommand::Cancel));
    }

    #[test]
    fn screen_keys_do_not_collide_with_nav_keys() {
        // Arrow keys drive the operations cursor; the nav bar never claims them.
        assert!(parse_operations_command(&KeyCode::Up).is_some());
        assert!(parse_nav_command(&KeyCode::Up).is_none());
        // 'd' stays a nav key on the chart screen because no chart command uses it.
        assert!(parse_chart_command(&KeyCode::Char('d')).is_none());
        assert_eq!(parse_nav_command(&KeyCode::Char('d')), Some(NavCommand::Demos));
    }
}
