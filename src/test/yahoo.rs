#[cfg(test)]
mod tests {
    use axum::{
        Json, Router,
        extract::Path,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    use reqwest::Url;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use tokio::net::TcpListener;

    use crate::{
        api::{QuoteProvider, YahooApi},
        error::FailureCause,
    };

    async fn chart(Path(symbol): Path<String>) -> Response {
        match symbol.as_str() {
            "AAPL" => Json(json!({
                "chart": {
                    "result": [{
                        "meta": {
                            "currency": "USD",
                            "symbol": "AAPL",
                            "regularMarketPrice": 150.0,
                            "previousClose": 148.5,
                            "chartPreviousClose": 140.0,
                            "regularMarketTime": 1700000000
                        }
                    }],
                    "error": null
                }
            }))
            .into_response(),
            "MSFT" => Json(json!({
                "chart": {
                    "result": [{
                        "meta": {
                            "symbol": "MSFT",
                            "regularMarketPrice": 300.1,
                            "chartPreviousClose": 305.0
                        }
                    }],
                    "error": null
                }
            }))
            .into_response(),
            "DELISTED" => Json(json!({
                "chart": {
                    "result": null,
                    "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
                }
            }))
            .into_response(),
            "LIMITED" => Json(json!({
                "chart": {
                    "result": null,
                    "error": {"code": "Too Many Requests", "description": null}
                }
            }))
            .into_response(),
            "EMPTY" => Json(json!({"chart": {"result": [], "error": null}})).into_response(),
            "PARTIAL" => Json(json!({
                "chart": {
                    "result": [{"meta": {"symbol": "PARTIAL", "previousClose": 10.0}}],
                    "error": null
                }
            }))
            .into_response(),
            "HUGE" => Json(json!({
                "chart": {
                    "result": [{"meta": {"symbol": "HUGE", "regularMarketPrice": 1e300, "previousClose": 10.0}}],
                    "error": null
                }
            }))
            .into_response(),
            "GARBAGE" => "<html>maintenance</html>".into_response(),
            "BUSY" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
            _ => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "chart": {
                        "result": null,
                        "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
                    }
                })),
            )
                .into_response(),
        }
    }

    async fn spawn_upstream() -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/v8/finance/chart/:symbol", get(chart));

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Url::parse(&format!("http://{}", addr)).unwrap()
    }

    async fn api() -> YahooApi {
        YahooApi::new(spawn_upstream().await, None).unwrap()
    }

    #[tokio::test]
    async fn get_quote_works() {
        let quote = api().await.fast_quote("AAPL").await.unwrap();

        assert_eq!(quote.symbol(), "AAPL");
        assert_eq!(*quote.last_price(), dec!(150));
        assert_eq!(*quote.previous_close(), dec!(148.5));
        assert_eq!(quote.currency().as_deref(), Some("USD"));
        assert_eq!(
            quote.market_time().map(|time| time.timestamp()),
            Some(1700000000)
        );
    }

    #[tokio::test]
    async fn falls_back_to_chart_previous_close() {
        let quote = api().await.fast_quote("MSFT").await.unwrap();

        assert_eq!(*quote.last_price(), dec!(300.1));
        assert_eq!(*quote.previous_close(), dec!(305));
        assert_eq!(*quote.currency(), None);
    }

    #[tokio::test]
    async fn not_found_status_is_symbol_not_found() {
        let err = api().await.fast_quote("ZZZZ").await.unwrap_err();

        assert_eq!(err.cause(), FailureCause::SymbolNotFound);
    }

    #[tokio::test]
    async fn chart_error_is_classified() {
        let api = api().await;

        let err = api.fast_quote("DELISTED").await.unwrap_err();
        assert_eq!(err.cause(), FailureCause::SymbolNotFound);

        let err = api.fast_quote("LIMITED").await.unwrap_err();
        assert_eq!(err.cause(), FailureCause::UpstreamUnavailable);

        let err = api.fast_quote("EMPTY").await.unwrap_err();
        assert_eq!(err.cause(), FailureCause::SymbolNotFound);
    }

    #[tokio::test]
    async fn unusable_payload_is_malformed() {
        let api = api().await;

        let err = api.fast_quote("PARTIAL").await.unwrap_err();
        assert_eq!(err.cause(), FailureCause::MalformedUpstreamResponse);

        let err = api.fast_quote("GARBAGE").await.unwrap_err();
        assert_eq!(err.cause(), FailureCause::MalformedUpstreamResponse);

        // Too large for a Decimal.
        let err = api.fast_quote("HUGE").await.unwrap_err();
        assert_eq!(err.cause(), FailureCause::MalformedUpstreamResponse);
    }

    #[tokio::test]
    async fn server_errors_are_upstream_unavailable() {
        let err = api().await.fast_quote("BUSY").await.unwrap_err();

        assert_eq!(err.cause(), FailureCause::UpstreamUnavailable);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_upstream_unavailable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = YahooApi::new(Url::parse(&format!("http://{}", addr)).unwrap(), None).unwrap();
        let err = api.fast_quote("AAPL").await.unwrap_err();

        assert_eq!(err.cause(), FailureCause::UpstreamUnavailable);
    }
}
