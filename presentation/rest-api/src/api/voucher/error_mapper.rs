use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::voucher::errors::VoucherError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for VoucherError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            VoucherError::CodeTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "voucher.code_too_short",
            ),
            VoucherError::CodeInvalidCharacters => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "voucher.code_invalid_characters",
            ),
            VoucherError::DiscountNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "voucher.discount_not_positive",
            ),
            VoucherError::PercentageOverHundred => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "voucher.percentage_over_hundred",
            ),
            VoucherError::DuplicatedCode => (
                StatusCode::CONFLICT,
                "ConflictError",
                "voucher.duplicated_code",
            ),
            VoucherError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "voucher.not_found"),
            VoucherError::Repository(_) => (
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
