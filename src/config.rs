use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::api::yahoo::BASE_URL;

/// Command line and environment configuration. Values from a `.env` file are
/// picked up as environment variables.
#[derive(Clone, Debug, Parser)]
#[command(name = "stock-quote-relay", version, about)]
pub struct Config {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "STOCK_QUOTE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP listener to
    #[arg(long, env = "STOCK_QUOTE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Base URL of the Yahoo Finance API
    #[arg(long, env = "STOCK_QUOTE_UPSTREAM_URL", default_value = BASE_URL)]
    pub upstream_url: Url,

    /// Timeout for upstream requests in seconds; no timeout when unset
    #[arg(long, env = "STOCK_QUOTE_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }
}
