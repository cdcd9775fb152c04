use serde::Deserialize;

pub const DEFAULT_SYMBOL: &str = "AAPL";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct QuoteRequest {
    #[serde(default)]
    symbol: Option<String>,
}

impl QuoteRequest {
    pub fn new(symbol: Option<String>) -> Self {
        Self { symbol }
    }

    /// Uppercased symbol to look up, falling back to `AAPL` when it is missing
    /// or empty. Anything else is passed through as given.
    pub fn effective_symbol(&self) -> String {
        self.symbol
            .as_deref()
            .filter(|symbol| !symbol.is_empty())
            .unwrap_or(DEFAULT_SYMBOL)
            .to_uppercase()
    }
}
