//! Coin store - observable fetch state and the load/refresh state machine
//!
//! Owns the single current [`UiState`] value. The view side never mutates it;
//! it observes transitions through [`CoinStore::subscribe`] or the render
//! channel driven by the app actor.

use tokio::sync::{mpsc, watch};

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{CoinListItem, Currency};

/// Result of the last fetch attempt, replaced whole on every transition
#[derive(Clone, Debug, PartialEq)]
pub enum UiState {
    Loading,
    /// Last successfully fetched list, in server order
    Success(Vec<CoinListItem>),
    /// Opaque fetch failure cause, enough to display and retry
    Error(String),
}

/// Mediates between the view side and the market data source.
///
/// Every `load_coins` call is tagged with a monotonically increasing request
/// id and recorded as the pending fetch. Responses for any other id are
/// superseded fetches and are discarded, so the latest issued request always
/// determines the visible state even when completions arrive out of order.
pub struct CoinStore {
    state_tx: watch::Sender<UiState>,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    next_request_id: u64,
    pending_request_id: Option<u64>,
}

impl CoinStore {
    pub fn new(network_tx: mpsc::UnboundedSender<NetworkCommand>) -> Self {
        CoinStore {
            state_tx: watch::Sender::new(UiState::Loading),
            network_tx,
            next_request_id: 1,
            pending_request_id: None,
        }
    }

    /// Subscribe to state transitions; every subscriber sees every change
    #[allow(dead_code)] // Subscribers beyond the render channel (library API)
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state
    pub fn current(&self) -> UiState {
        self.state_tx.borrow().clone()
    }

    /// Start a fetch for the given currency, returning its request id.
    ///
    /// Transitions to `Loading` synchronously, before the fetch is handed to
    /// the market actor.
    pub fn load_coins(&mut self, currency: Currency) -> u64 {
        self.state_tx.send_replace(UiState::Loading);

        let id = self.next_id();
        self.pending_request_id = Some(id);
        let _ = self
            .network_tx
            .send(NetworkCommand::FetchCoins { id, currency });
        id
    }

    /// Apply a fetch completion.
    ///
    /// Returns the settled request id when the response matched the pending
    /// fetch, or `None` when it came from a superseded fetch and was dropped.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<u64> {
        let id = response.id();
        if self.pending_request_id != Some(id) {
            tracing::warn!(id, "Discarding response from superseded fetch");
            return None;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::Coins { items, .. } => {
                self.state_tx.send_replace(UiState::Success(items));
            }
            NetworkResponse::Error { message, .. } => {
                self.state_tx.send_replace(UiState::Error(message));
            }
        }
        Some(id)
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(name: &str, price: f64) -> CoinListItem {
        CoinListItem {
            name: String::from(name),
            symbol: name[..3].to_uppercase(),
            image_url: format!("https://example.com/{}.png", name),
            price,
            currency: Currency::Usd,
            tendency: 0.5,
        }
    }

    fn store() -> (CoinStore, mpsc::UnboundedReceiver<NetworkCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (CoinStore::new(tx), rx)
    }

    #[test]
    fn test_load_transitions_to_loading_synchronously() {
        let (mut store, mut net_rx) = store();
        let id = store.load_coins(Currency::Rub);

        assert_eq!(store.current(), UiState::Loading);
        match net_rx.try_recv().unwrap() {
            NetworkCommand::FetchCoins { id: sent, currency } => {
                assert_eq!(sent, id);
                assert_eq!(currency, Currency::Rub);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_success_keeps_items_and_order() {
        let (mut store, _net_rx) = store();
        let id = store.load_coins(Currency::Usd);

        let items = vec![coin("bitcoin", 65000.1234), coin("ethereum", 3000.5)];
        store.handle_response(NetworkResponse::Coins {
            id,
            items: items.clone(),
        });

        assert_eq!(store.current(), UiState::Success(items));
    }

    #[test]
    fn test_failure_transitions_to_error_with_that_cause() {
        let (mut store, _net_rx) = store();
        let id = store.load_coins(Currency::Usd);

        store.handle_response(NetworkResponse::Error {
            id,
            message: String::from("connection refused"),
        });

        assert_eq!(
            store.current(),
            UiState::Error(String::from("connection refused"))
        );
    }

    #[test]
    fn test_error_then_retry_goes_back_to_loading() {
        let (mut store, _net_rx) = store();
        let id = store.load_coins(Currency::Rub);
        store.handle_response(NetworkResponse::Error {
            id,
            message: String::from("timeout"),
        });

        store.load_coins(Currency::Rub);
        assert_eq!(store.current(), UiState::Loading);
    }

    #[test]
    fn test_latest_issued_request_wins() {
        let (mut store, _net_rx) = store();
        let first = store.load_coins(Currency::Usd);
        let second = store.load_coins(Currency::Usd);

        let fresh = vec![coin("bitcoin", 65100.0)];
        assert_eq!(
            store.handle_response(NetworkResponse::Coins {
                id: second,
                items: fresh.clone(),
            }),
            Some(second)
        );
        assert_eq!(store.current(), UiState::Success(fresh.clone()));

        // The superseded fetch completes late; its data must not overwrite
        let stale = vec![coin("bitcoin", 64000.0)];
        assert_eq!(
            store.handle_response(NetworkResponse::Coins {
                id: first,
                items: stale,
            }),
            None
        );
        assert_eq!(store.current(), UiState::Success(fresh));
    }

    #[test]
    fn test_stale_completion_before_pending_is_discarded() {
        let (mut store, _net_rx) = store();
        let first = store.load_coins(Currency::Usd);
        let second = store.load_coins(Currency::Usd);

        // Out-of-order: the superseded fetch finishes first
        store.handle_response(NetworkResponse::Coins {
            id: first,
            items: vec![coin("bitcoin", 64000.0)],
        });
        assert_eq!(store.current(), UiState::Loading);

        let fresh = vec![coin("bitcoin", 65100.0)];
        store.handle_response(NetworkResponse::Coins {
            id: second,
            items: fresh.clone(),
        });
        assert_eq!(store.current(), UiState::Success(fresh));
    }

    #[test]
    fn test_stale_error_cannot_replace_fresh_success() {
        let (mut store, _net_rx) = store();
        let first = store.load_coins(Currency::Usd);
        let second = store.load_coins(Currency::Usd);

        let items = vec![coin("bitcoin", 65100.0)];
        store.handle_response(NetworkResponse::Coins {
            id: second,
            items: items.clone(),
        });
        store.handle_response(NetworkResponse::Error {
            id: first,
            message: String::from("timeout"),
        });

        assert_eq!(store.current(), UiState::Success(items));
    }

    #[test]
    fn test_all_subscribers_see_every_transition() {
        let (mut store, _net_rx) = store();
        let mut a = store.subscribe();
        let mut b = store.subscribe();

        let id = store.load_coins(Currency::Usd);
        assert!(a.has_changed().unwrap());
        assert!(b.has_changed().unwrap());
        assert_eq!(*a.borrow_and_update(), UiState::Loading);
        assert_eq!(*b.borrow_and_update(), UiState::Loading);

        store.handle_response(NetworkResponse::Coins { id, items: vec![] });
        assert!(a.has_changed().unwrap());
        assert_eq!(*a.borrow_and_update(), UiState::Success(vec![]));
        assert_eq!(*b.borrow(), UiState::Success(vec![]));
    }
}
