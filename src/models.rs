use serde::{Deserialize, Serialize};

/// Pricing currency for the coin list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    Usd,
    Rub,
}

/// Fixed display order of the currency selector
pub const CURRENCIES: [Currency; 2] = [Currency::Usd, Currency::Rub];

impl Currency {
    /// Display code, also shown on the price line
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Rub => "RUB",
        }
    }

    /// Lowercase code used as the API `vs_currency` parameter
    pub fn api_code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Rub => "rub",
        }
    }

    /// Currency at the given selector position, if valid
    pub fn from_index(index: usize) -> Option<Currency> {
        CURRENCIES.get(index).copied()
    }
}

/// A single row of the coin list, in the currency it was fetched for
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoinListItem {
    /// Coin name, unique within one fetched snapshot
    pub name: String,
    /// Ticker symbol, e.g. "BTC"
    pub symbol: String,
    /// Logo image reference (shown in the detail view)
    pub image_url: String,
    /// Current price in `currency`
    pub price: f64,
    pub currency: Currency,
    /// Signed 24h percentage change
    pub tendency: f64,
}

impl CoinListItem {
    /// Identifier handed to the detail view on activation
    pub fn detail_id(&self) -> String {
        self.name.to_lowercase()
    }
}
