use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{CreateOrderRequest, OrderResponse, UpdateOrderStatusRequest};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    create_use_case: Arc<dyn CreateOrderUseCase>,
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        create_use_case: Arc<dyn CreateOrderUseCase>,
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_status_use_case,
        }
    }
}

/// Order API
///
/// Public checkout plus the admin order list and status management.
#[OpenApi]
impl OrderApi {
    /// Place an order
    ///
    /// Storefront checkout; no authentication required. The product name and
    /// price are snapshotted into the order.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn create_order(&self, body: Json<CreateOrderRequest>) -> CreateOrderResponse {
        let params = CreateOrderParams {
            customer_name: body.0.customer_name,
            customer_email: body.0.customer_email,
            product_id: body.0.product_id,
            user_id: None,
        };

        match self.create_use_case.execute(params).await {
            Ok(order) => CreateOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateOrderResponse::BadRequest(json),
                    422 => CreateOrderResponse::UnprocessableEntity(json),
                    _ => CreateOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// List all orders
    ///
    /// Admin view, newest first.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(&self, _auth: FirebaseBearer) -> GetAllOrdersResponse {
        match self.get_all_use_case.execute().await {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(|o| o.into()).collect();
                GetAllOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Update an order's status
    #[oai(path = "/orders/:id/status", method = "put", tag = "ApiTags::Orders")]
    async fn update_order_status(
        &self,
        _auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> UpdateOrderStatusResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateOrderStatusResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_id".to_string(),
                }));
            }
        };

        match self
            .update_status_use_case
            .execute(UpdateOrderStatusParams {
                id: uuid,
                status: body.0.status.into(),
            })
            .await
        {
            Ok(order) => UpdateOrderStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateOrderStatusResponse::NotFound(json),
                    _ => UpdateOrderStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
