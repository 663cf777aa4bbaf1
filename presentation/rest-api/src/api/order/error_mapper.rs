use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::CustomerNameTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.customer_name_too_short",
            ),
            OrderError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.invalid_email",
            ),
            OrderError::ProductNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "order.product_not_found",
            ),
            OrderError::ProductInactive => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "order.product_inactive",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "order.not_found"),
            OrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
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
