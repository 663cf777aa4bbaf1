use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

/// A digital template offered in the storefront.
/// Prices are integer Rupiah.
#[derive(Debug, Clone)]
pub struct Product {
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

pub struct NewProductProps {
    pub name: String,
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: i64,
    pub image_url: String,
    pub active: bool,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if props.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }
        if props.price < 0 {
            return Err(ProductError::PriceNegative);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name.trim().to_string(),
            headline: props.headline,
            subheadline: props.subheadline,
            description: props.description,
            features: props.features,
            price: props.price,
            image_url: props.image_url,
            active: props.active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the landing headline with a chosen suggestion.
    pub fn apply_headline(&mut self, headline: &str) -> Result<(), ProductError> {
        let headline = headline.trim();
        if headline.is_empty() {
            return Err(ProductError::HeadlineEmpty);
        }
        self.headline = headline.to_string();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        headline: String,
        subheadline: String,
        description: String,
        features: Vec<String>,
        price: i64,
        image_url: String,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            headline,
            subheadline,
            description,
            features,
            price,
            image_url,
            active,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_props() -> NewProductProps {
        NewProductProps {
            name: "Template Portfolio Instan".to_string(),
            headline: "Buat Kesan Pertama yang Tak Terlupakan".to_string(),
            subheadline: "Tingkatkan personal branding Anda".to_string(),
            description: "Portfolio profesional dalam hitungan menit".to_string(),
            features: vec!["Desain Modern & Responsif".to_string()],
            price: 149_000,
            image_url: "https://example.com/template.png".to_string(),
            active: true,
        }
    }

    #[test]
    fn should_create_product_when_valid() {
        let product = Product::new(valid_props()).unwrap();
        assert_eq!(product.name, "Template Portfolio Instan");
        assert_eq!(product.price, 149_000);
        assert!(product.active);
    }

    #[test]
    fn should_reject_empty_name() {
        let mut props = valid_props();
        props.name = "  ".to_string();
        assert!(matches!(Product::new(props), Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_empty_description() {
        let mut props = valid_props();
        props.description = "".to_string();
        assert!(matches!(
            Product::new(props),
            Err(ProductError::DescriptionEmpty)
        ));
    }

    #[test]
    fn should_reject_negative_price() {
        let mut props = valid_props();
        props.price = -1;
        assert!(matches!(
            Product::new(props),
            Err(ProductError::PriceNegative)
        ));
    }

    #[test]
    fn should_apply_headline_and_touch_updated_at() {
        let mut product = Product::new(valid_props()).unwrap();
        let before = product.updated_at;

        product
            .apply_headline("Portofolio Online dalam 10 Menit")
            .unwrap();

        assert_eq!(product.headline, "Portofolio Online dalam 10 Menit");
        assert!(product.updated_at >= before);
    }

    #[test]
    fn should_reject_blank_headline() {
        let mut product = Product::new(valid_props()).unwrap();
        assert!(matches!(
            product.apply_headline("   "),
            Err(ProductError::HeadlineEmpty)
        ));
    }
}
