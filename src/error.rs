use strum_macros::{AsRefStr, Display};
use thiserror::Error;

/// Why a quote lookup failed.
///
/// Callers only ever see a generic "Stock not found"; the cause is kept for
/// the server log.
#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum FailureCause {
    SymbolNotFound,
    UpstreamUnavailable,
    MalformedUpstreamResponse,
}

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),
}

impl QuoteError {
    pub fn cause(&self) -> FailureCause {
        match self {
            QuoteError::SymbolNotFound(_) => FailureCause::SymbolNotFound,
            QuoteError::UpstreamUnavailable(_) => FailureCause::UpstreamUnavailable,
            QuoteError::MalformedUpstreamResponse(_) => FailureCause::MalformedUpstreamResponse,
        }
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        // Status codes are classified in `make_request`; only transport and
        // body errors reach this point.
        if err.is_decode() {
            QuoteError::MalformedUpstreamResponse(err.to_string())
        } else {
            QuoteError::UpstreamUnavailable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::MalformedUpstreamResponse(err.to_string())
    }
}
