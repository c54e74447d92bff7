//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the CoinGecko market data API
pub const API_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Number of coins requested per fetch (first market-cap page)
pub const COINS_PER_PAGE: u32 = 50;

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Coinlist TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
