//! App state - pure data structure with no I/O logic
//!
//! Composes the observable [`CoinStore`] with the transient view-side state
//! (currency selection, refresh indicator, list selection, popups). The
//! view-side fields are deliberately not part of [`UiState`].

use tokio::sync::mpsc;

use crate::app::store::{CoinStore, UiState};
use crate::messages::{NetworkCommand, RenderState};
use crate::models::CoinListItem;

/// Main application state - pure data, no I/O
pub struct AppState {
    /// Observable fetch state holder
    pub store: CoinStore,

    /// Selector index of the chosen pricing currency, always in range
    pub chosen_currency: usize,

    /// True while the fetch triggered by a refresh is in flight
    pub refreshing: bool,
    /// Request id of that refresh-triggered fetch
    pub refresh_request_id: Option<u64>,

    /// When the visible list was fetched
    pub fetched_at: Option<chrono::DateTime<chrono::Utc>>,

    // List selection
    pub selected_coin: usize,

    // Popups
    pub detail: Option<CoinListItem>,
    pub show_help: bool,
}

impl AppState {
    pub fn new(network_tx: mpsc::UnboundedSender<NetworkCommand>) -> Self {
        AppState {
            store: CoinStore::new(network_tx),
            chosen_currency: 0,
            refreshing: false,
            refresh_request_id: None,
            fetched_at: None,
            selected_coin: 0,
            detail: None,
            show_help: false,
        }
    }

    /// Items of the current success state, if any
    pub fn coins(&self) -> Option<Vec<CoinListItem>> {
        match self.store.current() {
            UiState::Success(items) => Some(items),
            _ => None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            ui_state: self.store.current(),
            chosen_currency: self.chosen_currency,
            refreshing: self.refreshing,
            fetched_at: self.fetched_at,
            selected_coin: self.selected_coin,
            detail: self.detail.clone(),
            show_help: self.show_help,
        }
    }
}
