pub mod base;
pub mod yahoo;
pub mod yahoo_dto;

use async_trait::async_trait;

use crate::{error::QuoteError, models::UpstreamQuote};

pub use yahoo::YahooApi;

/// Source of the last traded price and previous close for a symbol.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fast_quote(&self, symbol: &str) -> Result<UpstreamQuote, QuoteError>;
}
