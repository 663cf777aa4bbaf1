use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::referral::errors::ReferralError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReferralError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ReferralError::ReferrerNameTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "referral.referrer_name_too_short",
            ),
            ReferralError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "referral.invalid_email",
            ),
            ReferralError::CommissionNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "referral.commission_negative",
            ),
            ReferralError::Repository(_) => (
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
