use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::headline::errors::HeadlineError;
use business::domain::headline::use_cases::apply::{ApplyHeadlineParams, ApplyHeadlineUseCase};
use business::domain::headline::use_cases::generate::{
    GenerateHeadlinesParams, GenerateHeadlinesUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::headline::dto::{
    ApplyHeadlineRequest, GenerateHeadlinesRequest, HeadlineSuggestionsResponse,
    RateLimitedResponse,
};
use crate::api::product::dto::ProductResponse;
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct HeadlineApi {
    generate_use_case: Arc<dyn GenerateHeadlinesUseCase>,
    apply_use_case: Arc<dyn ApplyHeadlineUseCase>,
}

impl HeadlineApi {
    pub fn new(
        generate_use_case: Arc<dyn GenerateHeadlinesUseCase>,
        apply_use_case: Arc<dyn ApplyHeadlineUseCase>,
    ) -> Self {
        Self {
            generate_use_case,
            apply_use_case,
        }
    }
}

/// Headline API
///
/// Endpoints for the AI-assisted marketing headline generator used by the
/// admin dashboard.
#[OpenApi]
impl HeadlineApi {
    /// Generate alternative headlines
    ///
    /// Asks the text-generation model for conversion-focused alternatives to
    /// the current landing headline. Long-latency call; subject to a fixed
    /// rate limit.
    #[oai(path = "/headlines", method = "post", tag = "ApiTags::Headlines")]
    async fn generate_headlines(
        &self,
        auth: FirebaseBearer,
        body: Json<GenerateHeadlinesRequest>,
    ) -> GenerateHeadlinesResponse {
        let params = GenerateHeadlinesParams {
            user_id: UserId::new(auth.0),
            product_description: body.0.product_description,
            current_headline: body.0.current_headline,
        };

        match self.generate_use_case.execute(params).await {
            Ok(suggestions) => GenerateHeadlinesResponse::Ok(Json(suggestions.into())),
            Err(HeadlineError::RateLimitExceeded { retry_after }) => {
                GenerateHeadlinesResponse::TooManyRequests(Json(RateLimitedResponse {
                    name: "RateLimitError".to_string(),
                    message: "headline.rate_limit_exceeded".to_string(),
                    retry_after_secs: retry_after.as_secs(),
                }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GenerateHeadlinesResponse::BadRequest(json),
                    502 => GenerateHeadlinesResponse::BadGateway(json),
                    _ => GenerateHeadlinesResponse::InternalError(json),
                }
            }
        }
    }

    /// Apply a chosen headline to a product
    ///
    /// Persists one of the generated suggestions as the product's landing
    /// headline. Last write wins.
    #[oai(
        path = "/products/:id/headline",
        method = "put",
        tag = "ApiTags::Headlines"
    )]
    async fn apply_headline(
        &self,
        _auth: FirebaseBearer,
        id: Path<String>,
        body: Json<ApplyHeadlineRequest>,
    ) -> ApplyHeadlineResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return ApplyHeadlineResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        match self
            .apply_use_case
            .execute(ApplyHeadlineParams {
                product_id: uuid,
                headline: body.0.headline,
            })
            .await
        {
            Ok(product) => ApplyHeadlineResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ApplyHeadlineResponse::BadRequest(json),
                    404 => ApplyHeadlineResponse::NotFound(json),
                    _ => ApplyHeadlineResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateHeadlinesResponse {
    #[oai(status = 200)]
    Ok(Json<HeadlineSuggestionsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<RateLimitedResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ApplyHeadlineResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
