//! Market data client - fetches coin lists and maps them to list items

use serde::Deserialize;

use crate::constants::{API_BASE_URL, COINS_PER_PAGE};
use crate::messages::NetworkResponse;
use crate::models::{CoinListItem, Currency};

/// One entry of the `/coins/markets` response
#[derive(Debug, Deserialize)]
struct MarketCoin {
    name: String,
    symbol: String,
    image: String,
    #[serde(default)]
    current_price: Option<f64>,
    #[serde(default)]
    price_change_percentage_24h: Option<f64>,
}

impl MarketCoin {
    fn into_item(self, currency: Currency) -> CoinListItem {
        CoinListItem {
            name: self.name,
            symbol: self.symbol,
            image_url: self.image,
            price: self.current_price.unwrap_or(0.0),
            currency,
            // Freshly listed coins come back with a null 24h change
            tendency: self.price_change_percentage_24h.unwrap_or(0.0),
        }
    }
}

/// URL of the market listing for the given currency
fn markets_url(currency: Currency) -> String {
    format!(
        "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page=1",
        API_BASE_URL,
        currency.api_code(),
        COINS_PER_PAGE
    )
}

/// Fetch the coin list for a currency; all failures collapse to `Error`
pub async fn fetch_coin_list(
    client: &reqwest::Client,
    currency: Currency,
    request_id: u64,
) -> NetworkResponse {
    let result = client.get(markets_url(currency)).send().await;

    match result {
        Ok(resp) => {
            let status = resp.status();
            if !status.is_success() {
                return NetworkResponse::Error {
                    id: request_id,
                    message: format!("Server returned {}", status),
                };
            }
            match resp.json::<Vec<MarketCoin>>().await {
                Ok(coins) => NetworkResponse::Coins {
                    id: request_id,
                    items: coins.into_iter().map(|c| c.into_item(currency)).collect(),
                },
                Err(e) => NetworkResponse::Error {
                    id: request_id,
                    message: format!("Error decoding response: {}", e),
                },
            }
        }
        Err(e) => {
            let msg = if e.is_timeout() {
                "Request timed out (30s)".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            NetworkResponse::Error {
                id: request_id,
                message: msg,
            }
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markets_url_carries_currency() {
        let url = markets_url(Currency::Rub);
        assert!(url.starts_with(API_BASE_URL));
        assert!(url.contains("vs_currency=rub"));
        assert!(url.contains("order=market_cap_desc"));
    }

    #[test]
    fn test_market_payload_maps_in_order() {
        let payload = r#"[
            {
                "name": "Bitcoin",
                "symbol": "btc",
                "image": "https://example.com/btc.png",
                "current_price": 65000.1234,
                "price_change_percentage_24h": -1.2345
            },
            {
                "name": "Ethereum",
                "symbol": "eth",
                "image": "https://example.com/eth.png",
                "current_price": 3000.5,
                "price_change_percentage_24h": null
            }
        ]"#;

        let coins: Vec<MarketCoin> = serde_json::from_str(payload).unwrap();
        let items: Vec<CoinListItem> = coins
            .into_iter()
            .map(|c| c.into_item(Currency::Usd))
            .collect();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Bitcoin");
        assert_eq!(items[0].price, 65000.1234);
        assert_eq!(items[0].tendency, -1.2345);
        // Null 24h change defaults to flat
        assert_eq!(items[1].name, "Ethereum");
        assert_eq!(items[1].tendency, 0.0);
        assert_eq!(items[1].currency, Currency::Usd);
    }
}
