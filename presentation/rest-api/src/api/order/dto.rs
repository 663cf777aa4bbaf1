use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::model::Order;
use business::domain::order::value_objects::OrderStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "processed")]
    Processed,
    #[oai(rename = "completed")]
    Completed,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(s: OrderStatus) -> Self {
        match s {
            OrderStatus::Pending => OrderStatusDto::Pending,
            OrderStatus::Processed => OrderStatusDto::Processed,
            OrderStatus::Completed => OrderStatusDto::Completed,
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(s: OrderStatusDto) -> Self {
        match s {
            OrderStatusDto::Pending => OrderStatus::Pending,
            OrderStatusDto::Processed => OrderStatus::Processed,
            OrderStatusDto::Completed => OrderStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateOrderRequest {
    /// Customer full name
    pub customer_name: String,
    /// Customer contact email
    pub customer_email: String,
    /// Product being purchased
    pub product_id: Uuid,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatusDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    /// Order unique identifier
    pub id: Uuid,
    /// Customer full name
    pub customer_name: String,
    /// Customer contact email
    pub customer_email: String,
    /// Product purchased
    pub product_id: Uuid,
    /// Product name at checkout time
    pub product_name: String,
    /// Price paid, in integer Rupiah
    pub price: i64,
    /// Fulfilment status
    pub status: OrderStatusDto,
    /// Checkout timestamp
    pub order_date: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            customer_name: o.customer_name,
            customer_email: o.customer_email.to_string(),
            product_id: o.product_id,
            product_name: o.product_name,
            price: o.price,
            status: o.status.into(),
            order_date: o.order_date,
        }
    }
}
