//! Market actor - runs coin list fetches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_coin_list};

/// Market actor that processes fetch commands
pub struct MarketActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_fetches: JoinSet<()>,
}

impl MarketActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        MarketActor {
            client: create_client(),
            response_tx,
            active_fetches: JoinSet::new(),
        }
    }

    /// Run the market actor message loop.
    ///
    /// Superseded fetches are not cancelled; the app layer discards their
    /// responses by request id.
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchCoins { id, currency }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, currency = currency.code(), "Fetching coin list");
                                let result = fetch_coin_list(&client, currency, id).await;
                                tracing::info!(id, "Fetch completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_fetches.join_next() => {}
            }
        }
    }
}
