use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: i64,
    pub image_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.headline,
            self.subheadline,
            self.description,
            self.features,
            self.price,
            self.image_url,
            self.active,
            self.created_at,
            self.updated_at,
        )
    }
}
