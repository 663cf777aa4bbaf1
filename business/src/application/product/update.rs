use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if params.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }
        if params.price < 0 {
            return Err(ProductError::PriceNegative);
        }

        let product = Product {
            id: existing.id,
            name: params.name.trim().to_string(),
            headline: params.headline,
            subheadline: params.subheadline,
            description: params.description,
            features: params.features,
            price: params.price,
            image_url: params.image_url,
            active: params.active,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product {} updated", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_product() -> Product {
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

    fn update_params(id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: "Template Portfolio Pro".to_string(),
            headline: "Portofolio Online dalam 10 Menit".to_string(),
            subheadline: "Untuk mahasiswa dan fresh graduate".to_string(),
            description: "Template premium dengan dukungan penuh".to_string(),
            features: vec!["SEO-Friendly".to_string()],
            price: 199_000,
            image_url: "https://example.com/pro.png".to_string(),
            active: false,
        }
    }

    #[tokio::test]
    async fn should_update_fields_and_keep_created_at() {
        let stored = stored_product();
        let created_at = stored.created_at;

        let mut mock_repo = MockProductRepo::new();
        let stored_clone = stored.clone();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored_clone.clone()));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case.execute(update_params(stored.id)).await.unwrap();

        assert_eq!(updated.name, "Template Portfolio Pro");
        assert_eq!(updated.price, 199_000);
        assert!(!updated.active);
        assert_eq!(updated.created_at, created_at);
    }

    #[tokio::test]
    async fn should_reject_update_of_missing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(update_params(Uuid::new_v4())).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
