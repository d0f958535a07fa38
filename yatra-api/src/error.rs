use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use yatra_core::SearchEnvelope;
use yatra_offer::DealsError;

/// Handler-level failures. Every variant renders as the uniform failure
/// envelope, so callers always branch on `success` instead of handling a
/// transport error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    BadRequest(#[from] JsonRejection),

    #[error(transparent)]
    Deals(#[from] DealsError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(rejection) => {
                tracing::error!("rejected request body: {rejection}");
                (StatusCode::BAD_REQUEST, "Unable to read search parameters.")
            }
            // An empty deal set is an expected outcome, not a transport
            // failure.
            AppError::Deals(cause) => {
                tracing::warn!("deal search came back empty: {cause}");
                (StatusCode::OK, "No round trip deals available.")
            }
        };

        let body = Json(SearchEnvelope::<serde_json::Value>::failure(
            self.to_string(),
            message,
        ));
        (status, body).into_response()
    }
}
