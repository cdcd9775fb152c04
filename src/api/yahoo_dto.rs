use chrono::{TimeZone, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::Deserialize;

use crate::{error::QuoteError, models::UpstreamQuote};

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartResponseDto {
    chart: YahooChartDto,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartDto {
    result: Option<Vec<YahooChartResultDto>>,
    error: Option<YahooChartErrorDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartResultDto {
    meta: YahooChartMetaDto,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMetaDto {
    symbol: Option<String>,
    currency: Option<String>,
    regular_market_price: Option<f64>,
    previous_close: Option<f64>,
    chart_previous_close: Option<f64>,
    regular_market_time: Option<i64>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartErrorDto {
    code: String,
    description: Option<String>,
}

impl YahooChartMetaDto {
    /// Checks that both prices are present before any arithmetic happens.
    /// `previousClose` is not always filled in, `chartPreviousClose` is the fallback.
    pub fn to_upstream_quote(&self, requested_symbol: &str) -> Result<UpstreamQuote, QuoteError> {
        let last_price = to_decimal(self.regular_market_price, "regularMarketPrice", requested_symbol)?;
        let previous_close = to_decimal(
            self.previous_close.or(self.chart_previous_close),
            "previousClose",
            requested_symbol,
        )?;

        let market_time = self
            .regular_market_time
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

        Ok(UpstreamQuote::new(
            self.symbol
                .clone()
                .unwrap_or_else(|| requested_symbol.to_string()),
            last_price,
            previous_close,
            self.currency.clone(),
            market_time,
        ))
    }
}

fn to_decimal(value: Option<f64>, field: &str, symbol: &str) -> Result<Decimal, QuoteError> {
    let value = value.ok_or_else(|| {
        QuoteError::MalformedUpstreamResponse(format!("Missing {} for {}", field, symbol))
    })?;

    Decimal::from_f64(value).ok_or_else(|| {
        QuoteError::MalformedUpstreamResponse(format!(
            "Failed to parse {} '{}' for {}",
            field, value, symbol
        ))
    })
}
