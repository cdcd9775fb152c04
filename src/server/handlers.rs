use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{info, warn};

use crate::{
    error::QuoteError,
    models::{ErrorBody, Quote, QuoteRequest},
    services::QuoteService,
};

#[derive(Debug)]
pub enum ApiError {
    /// Body was not a valid `QuoteRequest`.
    InvalidBody(JsonRejection),
    /// Every lookup failure looks the same from the outside.
    Lookup(QuoteError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody(rejection) => (
                rejection.status(),
                Json(ErrorBody::new(rejection.body_text())),
            )
                .into_response(),
            ApiError::Lookup(_) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody::stock_not_found())).into_response()
            }
        }
    }
}

pub async fn get_stock(
    State(service): State<QuoteService>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<Quote>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        info!("Rejected request body: {}", rejection.body_text());
        ApiError::InvalidBody(rejection)
    })?;

    match service.get_quote(&request).await {
        Ok(quote) => Ok(Json(quote)),
        Err(err) => {
            warn!(
                "Error fetching data for {} ({}): {}",
                request.effective_symbol(),
                err.cause(),
                err
            );
            Err(ApiError::Lookup(err))
        }
    }
}
