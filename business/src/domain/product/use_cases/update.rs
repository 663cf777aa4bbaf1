use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub name: String,
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: i64,
    pub image_url: String,
    pub active: bool,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
