use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};

use super::{QuoteProvider, base::make_request, yahoo_dto::YahooChartResponseDto};
use crate::{error::QuoteError, models::UpstreamQuote};

pub const BASE_URL: &str = "https://query1.finance.yahoo.com";

// The chart endpoint rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

const NOT_FOUND_CODE: &str = "Not Found";

#[derive(Clone, Debug)]
pub struct YahooApi {
    client: Client,
    base_url: Url,
}

impl YahooApi {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .context("Failed to build Yahoo Finance HTTP client")?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl QuoteProvider for YahooApi {
    async fn fast_quote(&self, symbol: &str) -> Result<UpstreamQuote, QuoteError> {
        let res = make_request(
            &self.client,
            &self.base_url,
            &["v8", "finance", "chart", symbol],
            &[("range", "1d"), ("interval", "1d")],
        )
        .await?;

        let response = serde_json::from_value::<YahooChartResponseDto>(res)?;
        let chart = response.chart();

        if let Some(error) = chart.error() {
            let message = format!(
                "{}: {}",
                error.code(),
                error.description().as_deref().unwrap_or("no description")
            );
            return Err(if error.code() == NOT_FOUND_CODE {
                QuoteError::SymbolNotFound(message)
            } else {
                QuoteError::UpstreamUnavailable(message)
            });
        }

        let first = chart
            .result()
            .as_ref()
            .and_then(|results| results.first())
            .ok_or_else(|| {
                QuoteError::SymbolNotFound(format!("No chart data found for symbol {}", symbol))
            })?;

        let quote = first.meta().to_upstream_quote(symbol)?;
        debug!(
            "Yahoo quote for {}: last={} previous_close={} currency={:?} as_of={:?}",
            symbol,
            quote.last_price(),
            quote.previous_close(),
            quote.currency(),
            quote.market_time()
        );

        Ok(quote)
    }
}
