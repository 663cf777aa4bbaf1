use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
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
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
