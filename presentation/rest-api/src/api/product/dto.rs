use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    pub name: String,
    #[oai(default)]
    pub headline: String,
    #[oai(default)]
    pub subheadline: String,
    pub description: String,
    #[oai(default)]
    pub features: Vec<String>,
    /// Price in integer Rupiah
    pub price: i64,
    #[oai(default)]
    pub image_url: String,
    #[oai(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    pub name: String,
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub features: Vec<String>,
    /// Price in integer Rupiah
    pub price: i64,
    pub image_url: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: Uuid,
    /// Template name
    pub name: String,
    /// Landing page headline
    pub headline: String,
    /// Supporting subheadline
    pub subheadline: String,
    /// Full description
    pub description: String,
    /// Selling points listed on the landing page
    pub features: Vec<String>,
    /// Price in integer Rupiah
    pub price: i64,
    /// Cover image URL
    pub image_url: String,
    /// Whether the template is purchasable
    pub active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            headline: p.headline,
            subheadline: p.subheadline,
            description: p.description,
            features: p.features,
            price: p.price,
            image_url: p.image_url,
            active: p.active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
