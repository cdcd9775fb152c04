use std::sync::Arc;

use log::debug;

use crate::{
    api::QuoteProvider,
    app::calc::build_quote,
    error::QuoteError,
    models::{Quote, QuoteRequest},
};

#[derive(Clone)]
pub struct QuoteService {
    provider: Arc<dyn QuoteProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    pub async fn get_quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
        let symbol = request.effective_symbol();
        debug!("Fetching quote for {}", symbol);

        let upstream = self.provider.fast_quote(&symbol).await?;
        build_quote(&symbol, &upstream)
    }
}
