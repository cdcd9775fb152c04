use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Quote as returned to the caller of `/get_stock`.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    symbol: String,
    #[serde(serialize_with = "serialize_number")]
    price: Decimal,
    #[serde(serialize_with = "serialize_number")]
    change: Decimal,
    #[serde(serialize_with = "serialize_number")]
    change_percent: Decimal,
}

/// Raw values reported by the market data provider, before any rounding.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct UpstreamQuote {
    symbol: String,
    last_price: Decimal,
    previous_close: Decimal,
    currency: Option<String>,
    market_time: Option<DateTime<Utc>>,
}

// Goes through the decimal string so 1.61 becomes the closest f64, not 1.6099999999999999.
fn serialize_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = value
        .to_string()
        .parse::<f64>()
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_f64(number)
}
