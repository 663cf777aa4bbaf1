use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::voucher::model::generate_code;
use business::domain::voucher::use_cases::create::{CreateVoucherParams, CreateVoucherUseCase};
use business::domain::voucher::use_cases::get_all::GetAllVouchersUseCase;
use business::domain::voucher::use_cases::set_active::{
    SetVoucherActiveParams, SetVoucherActiveUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;
use crate::api::voucher::dto::{
    CreateVoucherRequest, GeneratedCodeResponse, SetVoucherActiveRequest, VoucherResponse,
};

pub struct VoucherApi {
    create_use_case: Arc<dyn CreateVoucherUseCase>,
    get_all_use_case: Arc<dyn GetAllVouchersUseCase>,
    set_active_use_case: Arc<dyn SetVoucherActiveUseCase>,
}

impl VoucherApi {
    pub fn new(
        create_use_case: Arc<dyn CreateVoucherUseCase>,
        get_all_use_case: Arc<dyn GetAllVouchersUseCase>,
        set_active_use_case: Arc<dyn SetVoucherActiveUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            set_active_use_case,
        }
    }
}

/// Voucher API
///
/// Admin management of storefront discount codes.
#[OpenApi]
impl VoucherApi {
    /// Create a voucher
    #[oai(path = "/vouchers", method = "post", tag = "ApiTags::Vouchers")]
    async fn create_voucher(
        &self,
        _auth: FirebaseBearer,
        body: Json<CreateVoucherRequest>,
    ) -> CreateVoucherResponse {
        let params = CreateVoucherParams {
            code: body.0.code,
            discount_type: body.0.discount_type.into(),
            discount_value: body.0.discount_value,
            expiry_date: body.0.expiry_date,
            is_active: body.0.is_active,
        };

        match self.create_use_case.execute(params).await {
            Ok(voucher) => CreateVoucherResponse::Created(Json(voucher.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateVoucherResponse::BadRequest(json),
                    409 => CreateVoucherResponse::Conflict(json),
                    _ => CreateVoucherResponse::InternalError(json),
                }
            }
        }
    }

    /// List all vouchers
    #[oai(path = "/vouchers", method = "get", tag = "ApiTags::Vouchers")]
    async fn get_all_vouchers(&self, _auth: FirebaseBearer) -> GetAllVouchersResponse {
        match self.get_all_use_case.execute().await {
            Ok(vouchers) => {
                let responses: Vec<VoucherResponse> =
                    vouchers.into_iter().map(|v| v.into()).collect();
                GetAllVouchersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllVouchersResponse::InternalError(json)
            }
        }
    }

    /// Suggest a random voucher code
    ///
    /// Backs the "generate" button on the voucher form.
    #[oai(
        path = "/vouchers/generate-code",
        method = "get",
        tag = "ApiTags::Vouchers"
    )]
    async fn generate_voucher_code(&self, _auth: FirebaseBearer) -> Json<GeneratedCodeResponse> {
        Json(GeneratedCodeResponse {
            code: generate_code(),
        })
    }

    /// Activate or deactivate a voucher
    #[oai(
        path = "/vouchers/:id/active",
        method = "put",
        tag = "ApiTags::Vouchers"
    )]
    async fn set_voucher_active(
        &self,
        _auth: FirebaseBearer,
        id: Path<String>,
        body: Json<SetVoucherActiveRequest>,
    ) -> SetVoucherActiveResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return SetVoucherActiveResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "voucher.invalid_id".to_string(),
                }));
            }
        };

        match self
            .set_active_use_case
            .execute(SetVoucherActiveParams {
                id: uuid,
                is_active: body.0.is_active,
            })
            .await
        {
            Ok(voucher) => SetVoucherActiveResponse::Ok(Json(voucher.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SetVoucherActiveResponse::NotFound(json),
                    _ => SetVoucherActiveResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateVoucherResponse {
    #[oai(status = 201)]
    Created(Json<VoucherResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllVouchersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<VoucherResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetVoucherActiveResponse {
    #[oai(status = 200)]
    Ok(Json<VoucherResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
