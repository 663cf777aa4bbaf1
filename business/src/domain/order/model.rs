use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::OrderError;
use super::value_objects::OrderStatus;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{EmailAddress, UserId};

const MIN_CUSTOMER_NAME_CHARS: usize = 2;

/// A storefront checkout order.
///
/// Product name and price are snapshotted at checkout time so later catalog
/// edits do not rewrite order history.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_email: EmailAddress,
    pub product_id: Uuid,
    pub product_name: String,
    pub price: i64,
    pub status: OrderStatus,
    pub user_id: Option<UserId>,
    pub order_date: DateTime<Utc>,
}

pub struct NewOrderProps {
    pub customer_name: String,
    pub customer_email: String,
    pub user_id: Option<UserId>,
}

impl Order {
    /// Creates a pending order for the given product.
    pub fn place(props: NewOrderProps, product: &Product) -> Result<Self, OrderError> {
        let customer_name = props.customer_name.trim().to_string();
        if customer_name.chars().count() < MIN_CUSTOMER_NAME_CHARS {
            return Err(OrderError::CustomerNameTooShort);
        }

        let customer_email =
            EmailAddress::new(props.customer_email).map_err(|_| OrderError::InvalidEmail)?;

        Ok(Self {
            id: Uuid::new_v4(),
            customer_name,
            customer_email,
            product_id: product.id,
            product_name: product.name.clone(),
            price: product.price,
            status: OrderStatus::Pending,
            user_id: props.user_id,
            order_date: Utc::now(),
        })
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        customer_name: String,
        customer_email: EmailAddress,
        product_id: Uuid,
        product_name: String,
        price: i64,
        status: OrderStatus,
        user_id: Option<UserId>,
        order_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_name,
            customer_email,
            product_id,
            product_name,
            price,
            status,
            user_id,
            order_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{NewProductProps, Product};

    fn sample_product() -> Product {
        Product::new(NewProductProps {
            name: "Template Portfolio Instan".to_string(),
            headline: "Buat Kesan Pertama yang Tak Terlupakan".to_string(),
            subheadline: "Tingkatkan personal branding Anda".to_string(),
            description: "Portfolio profesional dalam hitungan menit".to_string(),
            features: vec![],
            price: 149_000,
            image_url: "https://example.com/template.png".to_string(),
            active: true,
        })
        .unwrap()
    }

    #[test]
    fn should_place_pending_order_with_product_snapshot() {
        let product = sample_product();

        let order = Order::place(
            NewOrderProps {
                customer_name: "Budi Santoso".to_string(),
                customer_email: "budi@example.com".to_string(),
                user_id: None,
            },
            &product,
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.product_id, product.id);
        assert_eq!(order.product_name, "Template Portfolio Instan");
        assert_eq!(order.price, 149_000);
    }

    #[test]
    fn should_reject_one_character_customer_name() {
        let result = Order::place(
            NewOrderProps {
                customer_name: "B".to_string(),
                customer_email: "budi@example.com".to_string(),
                user_id: None,
            },
            &sample_product(),
        );

        assert!(matches!(result, Err(OrderError::CustomerNameTooShort)));
    }

    #[test]
    fn should_reject_malformed_email() {
        let result = Order::place(
            NewOrderProps {
                customer_name: "Budi Santoso".to_string(),
                customer_email: "budi-at-example".to_string(),
                user_id: None,
            },
            &sample_product(),
        );

        assert!(matches!(result, Err(OrderError::InvalidEmail)));
    }
}
