use log::debug;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::error::QuoteError;

pub async fn make_request(
    client: &Client,
    base_url: &Url,
    segments: &[&str],
    params: &[(&str, &str)],
) -> Result<Value, QuoteError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| {
            QuoteError::UpstreamUnavailable(format!("Invalid upstream base URL: {}", base_url))
        })?
        .pop_if_empty()
        .extend(segments);
    url.query_pairs_mut().extend_pairs(params);

    debug!("GET {}", url);
    let res = client.get(url).send().await?;

    match res.status() {
        StatusCode::NOT_FOUND => {
            return Err(QuoteError::SymbolNotFound(format!(
                "Request failed: {}",
                res.status()
            )));
        }
        status if !status.is_success() => {
            return Err(QuoteError::UpstreamUnavailable(format!(
                "Request failed: {}",
                status
            )));
        }
        _ => {}
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}
