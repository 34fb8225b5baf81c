//! HTTP clients for the marketplace backend.

mod marketplace_client;

pub use marketplace_client::{HttpMarketplaceClient, MarketplaceApi};

#[cfg(any(test, feature = "test-utils"))]
pub use marketplace_client::MockMarketplaceApi;
