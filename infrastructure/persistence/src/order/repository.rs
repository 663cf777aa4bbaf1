use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;

use super::entity::OrderEntity;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, customer_name, customer_email, product_id, product_name, price, status, user_id, order_date FROM orders ORDER BY order_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, customer_name, customer_email, product_id, product_name, price, status, user_id, order_date FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO orders (id, customer_name, customer_email, product_id, product_name, price, status, user_id, order_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status"#,
        )
        .bind(order.id)
        .bind(&order.customer_name)
        .bind(order.customer_email.as_str())
        .bind(order.product_id)
        .bind(&order.product_name)
        .bind(order.price)
        .bind(order.status.to_string())
        .bind(order.user_id.as_ref().map(|u| u.as_str().to_string()))
        .bind(order.order_date)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
