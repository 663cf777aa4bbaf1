use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ApplyHeadlineParams {
    pub product_id: Uuid,
    pub headline: String,
}

/// Persists a chosen suggestion onto the product record.
/// Last write wins; no stronger guarantee is offered.
#[async_trait]
pub trait ApplyHeadlineUseCase: Send + Sync {
    async fn execute(&self, params: ApplyHeadlineParams) -> Result<Product, ProductError>;
}
