//! Command handlers - business logic for processing UI events

use crate::app::store::UiState;
use crate::app::AppState;
use crate::messages::NetworkResponse;
use crate::models::{Currency, CURRENCIES};

impl AppState {
    // ========================
    // Loading
    // ========================

    /// Issue the implicit first fetch for the default currency
    pub fn initial_load(&mut self) {
        self.load_chosen_currency();
    }

    /// Currency at the chosen selector index
    pub fn chosen(&self) -> Currency {
        // chosen_currency is only ever set through select_currency
        Currency::from_index(self.chosen_currency).unwrap_or_default()
    }

    /// Start a fetch for the chosen currency, without a refresh indicator.
    ///
    /// Supersedes any in-flight refresh fetch, so the indicator is cleared
    /// here instead of waiting for a settlement that will be discarded.
    fn load_chosen_currency(&mut self) -> u64 {
        self.refreshing = false;
        self.refresh_request_id = None;
        self.store.load_coins(self.chosen())
    }

    // ========================
    // User actions
    // ========================

    /// Select a currency by index and reload the list for it
    pub fn select_currency(&mut self, index: usize) {
        if Currency::from_index(index).is_none() {
            return;
        }
        self.chosen_currency = index;
        self.load_chosen_currency();
    }

    /// Refresh the visible list, or retry after an error.
    ///
    /// The refresh indicator is only shown for refreshes of a successful
    /// list, and stays up until that specific fetch settles.
    pub fn refresh(&mut self) {
        match self.store.current() {
            UiState::Success(_) => {
                let id = self.load_chosen_currency();
                self.refreshing = true;
                self.refresh_request_id = Some(id);
            }
            UiState::Error(_) => {
                self.load_chosen_currency();
            }
            // Already loading, nothing to do
            UiState::Loading => {}
        }
    }

    /// Enter: open the detail view in success, retry in error
    pub fn activate(&mut self) {
        match self.store.current() {
            UiState::Success(items) => {
                if let Some(item) = items.get(self.selected_coin) {
                    tracing::info!(coin = %item.detail_id(), "Opening coin detail");
                    self.detail = Some(item.clone());
                }
            }
            UiState::Error(_) => {
                self.load_chosen_currency();
            }
            UiState::Loading => {}
        }
    }

    // ========================
    // List navigation
    // ========================

    pub fn select_next(&mut self) {
        if let Some(items) = self.coins() {
            if self.selected_coin + 1 < items.len() {
                self.selected_coin += 1;
            }
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_coin = self.selected_coin.saturating_sub(1);
    }

    // ========================
    // Popups
    // ========================

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Fetch completions
    // ========================

    /// Apply a fetch completion and settle view-side bookkeeping
    pub fn handle_response(&mut self, response: NetworkResponse) {
        let was_success = matches!(response, NetworkResponse::Coins { .. });

        let Some(id) = self.store.handle_response(response) else {
            // Superseded fetch, nothing visible changed
            return;
        };

        if was_success {
            self.fetched_at = Some(chrono::Utc::now());
            // Keep the selection inside the new list
            if let Some(items) = self.coins() {
                self.selected_coin = self.selected_coin.min(items.len().saturating_sub(1));
            }
        }

        if self.refresh_request_id == Some(id) {
            self.refreshing = false;
            self.refresh_request_id = None;
        }
    }
}

/// Display codes of the currency selector, in order
pub fn currency_codes() -> Vec<&'static str> {
    CURRENCIES.iter().map(|c| c.code()).collect()
}
