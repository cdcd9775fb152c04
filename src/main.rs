use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use stock_quote_relay::{api::YahooApi, config::Config, server, services::QuoteService};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let config = Config::parse();
    let api = YahooApi::new(config.upstream_url.clone(), config.upstream_timeout())?;
    let service = QuoteService::new(Arc::new(api));

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;

    server::serve(listener, service).await
}
