//! Marketplace API client
//!
//! [`MarketClient`] talks HTTP to the backend. Everything above it depends on
//! the [`MarketApi`] traits so tests can swap in the mock.

pub mod api;
#[cfg(test)]
pub mod fixtures;
pub mod market;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod retry;

pub use api::MarketApi;
pub use market::MarketClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockMarketClient;
