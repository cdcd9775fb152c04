use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    error::QuoteError,
    models::{Quote, UpstreamQuote},
};

const DECIMAL_PLACES: u32 = 2;

/// Derives change and percent change from the raw provider values and rounds
/// the three output fields to two decimal places (half to even). The quote
/// carries `symbol` uppercased, whatever spelling the provider reported.
///
/// A previous close of zero or below has no meaningful percent change, so it
/// is treated as a malformed upstream answer, as is a negative last price.
pub fn build_quote(symbol: &str, upstream: &UpstreamQuote) -> Result<Quote, QuoteError> {
    let last_price = *upstream.last_price();
    let previous_close = *upstream.previous_close();

    if previous_close <= Decimal::ZERO {
        return Err(QuoteError::MalformedUpstreamResponse(format!(
            "previous close for {} must be positive, got {}",
            upstream.symbol(),
            previous_close
        )));
    }

    if last_price < Decimal::ZERO {
        return Err(QuoteError::MalformedUpstreamResponse(format!(
            "last price for {} must not be negative, got {}",
            upstream.symbol(),
            last_price
        )));
    }

    let change = last_price
        .checked_sub(previous_close)
        .ok_or_else(|| overflow(upstream.symbol()))?;

    let change_percent = change
        .checked_div(previous_close)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or_else(|| overflow(upstream.symbol()))?;

    Ok(Quote::new(
        symbol.to_uppercase(),
        last_price.round_dp(DECIMAL_PLACES),
        change.round_dp(DECIMAL_PLACES),
        change_percent.round_dp(DECIMAL_PLACES),
    ))
}

fn overflow(symbol: &str) -> QuoteError {
    QuoteError::MalformedUpstreamResponse(format!("price values for {} overflow", symbol))
}
