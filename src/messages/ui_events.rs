//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pick a currency by selector index
    SelectCurrency(usize),
    /// Reload the list for the selected currency (pull-to-refresh analog)
    Refresh,
    /// Context-dependent Enter: open detail in success, retry in error
    Activate,

    // List navigation
    SelectNext,
    SelectPrev,

    // Popups
    CloseDetail,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Map a key event to a UI event, given which overlays are open
pub fn key_to_ui_event(key: KeyEvent, show_help: bool, show_detail: bool) -> Option<UiEvent> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if show_detail {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(UiEvent::CloseDetail),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        KeyCode::Char(c @ '1'..='9') => {
            Some(UiEvent::SelectCurrency(c as usize - '1' as usize))
        }
        KeyCode::Enter => Some(UiEvent::Activate),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_select_currency() {
        assert_eq!(
            key_to_ui_event(key(KeyCode::Char('1')), false, false),
            Some(UiEvent::SelectCurrency(0))
        );
        assert_eq!(
            key_to_ui_event(key(KeyCode::Char('2')), false, false),
            Some(UiEvent::SelectCurrency(1))
        );
    }

    #[test]
    fn test_refresh_and_quit_keys() {
        assert_eq!(
            key_to_ui_event(key(KeyCode::Char('r')), false, false),
            Some(UiEvent::Refresh)
        );
        assert_eq!(
            key_to_ui_event(key(KeyCode::Char('q')), false, false),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        assert_eq!(
            key_to_ui_event(key(KeyCode::Char('r')), true, false),
            Some(UiEvent::CloseHelp)
        );
    }

    #[test]
    fn test_detail_popup_only_closes() {
        assert_eq!(
            key_to_ui_event(key(KeyCode::Esc), false, true),
            Some(UiEvent::CloseDetail)
        );
        assert_eq!(key_to_ui_event(key(KeyCode::Char('r')), false, true), None);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_c, true, false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(ctrl_c, false, true), Some(UiEvent::Quit));
    }
}
