use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::headline::use_cases::apply::{ApplyHeadlineParams, ApplyHeadlineUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

pub struct ApplyHeadlineUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ApplyHeadlineUseCase for ApplyHeadlineUseCaseImpl {
    async fn execute(&self, params: ApplyHeadlineParams) -> Result<Product, ProductError> {
        let mut product = self
            .repository
            .get_by_id(params.product_id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        product.apply_headline(&params.headline)?;
        self.repository.save(&product).await?;

        self.logger.info(&format!(
            "Applied new headline to product {}",
            product.id
        ));
        Ok(product)
    }
}
