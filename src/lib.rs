//! # Coinlist TUI
//!
//! A terminal-based cryptocurrency price board.
//!
//! ## Features
//! - Coin list with price and 24h tendency per coin
//! - Pricing currency switching (USD / RUB)
//! - Refresh with a settle-bound indicator
//! - Retry after failed fetches
//! - Per-coin detail view
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, CoinStore, UiState};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{CoinListItem, Currency, CURRENCIES};
pub use network::MarketActor;
