use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::headline::errors::HeadlineError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for HeadlineError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            HeadlineError::DescriptionEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "headline.description_empty",
            ),
            HeadlineError::RateLimitExceeded { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "RateLimitError",
                "headline.rate_limit_exceeded",
            ),
            HeadlineError::UpstreamUnavailable => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "headline.upstream_unavailable",
            ),
            HeadlineError::MalformedModelOutput => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GenerationError",
                "headline.malformed_model_output",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
