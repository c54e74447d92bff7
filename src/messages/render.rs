//! Render state - data structure sent from App layer to UI for rendering

use crate::app::store::UiState;
use crate::models::CoinListItem;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Result of the last fetch attempt
    pub ui_state: UiState,

    /// Selector index of the chosen pricing currency
    pub chosen_currency: usize,

    /// True while a refresh-triggered fetch is in flight
    pub refreshing: bool,

    /// When the visible list was fetched
    pub fetched_at: Option<chrono::DateTime<chrono::Utc>>,

    // List selection
    pub selected_coin: usize,

    // Popups
    pub detail: Option<CoinListItem>,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            ui_state: UiState::Loading,
            chosen_currency: 0,
            refreshing: false,
            fetched_at: None,
            selected_coin: 0,
            detail: None,
            show_help: false,
        }
    }
}
