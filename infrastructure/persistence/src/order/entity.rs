use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::order::model::Order;
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::{EmailAddress, UserId};

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub product_id: Uuid,
    pub product_name: String,
    pub price: i64,
    pub status: String,
    pub user_id: Option<String>,
    pub order_date: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Order {
        Order::from_repository(
            self.id,
            self.customer_name,
            EmailAddress::from_repository(self.customer_email),
            self.product_id,
            self.product_name,
            self.price,
            self.status
                .parse::<OrderStatus>()
                .unwrap_or(OrderStatus::Pending),
            self.user_id.map(UserId::new),
            self.order_date,
        )
    }
}
