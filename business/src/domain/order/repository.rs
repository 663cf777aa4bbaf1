use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders sorted newest first.
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
}
