use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::referral::use_cases::create::{CreateReferralParams, CreateReferralUseCase};
use business::domain::referral::use_cases::get_all::GetAllReferralsUseCase;
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::referral::dto::{CreateReferralRequest, ReferralResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct ReferralApi {
    create_use_case: Arc<dyn CreateReferralUseCase>,
    get_all_use_case: Arc<dyn GetAllReferralsUseCase>,
}

impl ReferralApi {
    pub fn new(
        create_use_case: Arc<dyn CreateReferralUseCase>,
        get_all_use_case: Arc<dyn GetAllReferralsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
        }
    }
}

/// Referral API
///
/// Admin tracking of referrals and their commissions.
#[OpenApi]
impl ReferralApi {
    /// Record a referral
    ///
    /// The authenticated admin is stored as the referrer of record.
    #[oai(path = "/referrals", method = "post", tag = "ApiTags::Referrals")]
    async fn create_referral(
        &self,
        auth: FirebaseBearer,
        body: Json<CreateReferralRequest>,
    ) -> CreateReferralResponse {
        let params = CreateReferralParams {
            referrer_id: UserId::new(auth.0),
            referrer_name: body.0.referrer_name,
            referred_email: body.0.referred_email,
            commission: body.0.commission,
            status: body.0.status.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(referral) => CreateReferralResponse::Created(Json(referral.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateReferralResponse::BadRequest(json),
                    _ => CreateReferralResponse::InternalError(json),
                }
            }
        }
    }

    /// List all referrals
    ///
    /// Admin view, newest first.
    #[oai(path = "/referrals", method = "get", tag = "ApiTags::Referrals")]
    async fn get_all_referrals(&self, _auth: FirebaseBearer) -> GetAllReferralsResponse {
        match self.get_all_use_case.execute().await {
            Ok(referrals) => {
                let responses: Vec<ReferralResponse> =
                    referrals.into_iter().map(|r| r.into()).collect();
                GetAllReferralsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllReferralsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateReferralResponse {
    #[oai(status = 201)]
    Created(Json<ReferralResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllReferralsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ReferralResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
