//! Network layer - market data fetches
//!
//! The Market actor receives fetch commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::MarketActor;
