use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct CreateOrderParams {
    pub customer_name: String,
    pub customer_email: String,
    pub product_id: Uuid,
    pub user_id: Option<UserId>,
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError>;
}
