//! Network messages - communication between App and Market layers

use crate::models::{CoinListItem, Currency};

/// Commands sent from App layer to Market layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the coin list priced in the given currency
    FetchCoins { id: u64, currency: Currency },
    /// Shutdown the market actor
    Shutdown,
}

/// Responses sent from Market layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Successful fetch, items in server order
    Coins { id: u64, items: Vec<CoinListItem> },
    /// Fetch failed; the message is the full error cause
    Error { id: u64, message: String },
}

impl NetworkResponse {
    /// Get the request ID the response settles
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Coins { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }
}
