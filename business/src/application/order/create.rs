use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{NewOrderProps, Order};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use crate::domain::product::repository::ProductRepository;

pub struct CreateOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError> {
        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => OrderError::ProductNotFound,
                other => OrderError::Repository(other),
            })?;

        if !product.active {
            return Err(OrderError::ProductInactive);
        }

        let order = Order::place(
            NewOrderProps {
                customer_name: params.customer_name,
                customer_email: params.customer_email,
                user_id: params.user_id,
            },
            &product,
        )?;

        self.repository.save(&order).await?;

        self.logger.info(&format!(
            "Order {} placed for product {}",
            order.id, order.product_id
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::value_objects::OrderStatus;
    use crate::domain::product::model::{NewProductProps, Product};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
            async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
        }
    }

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

    fn catalog_product(active: bool) -> Product {
        Product::new(NewProductProps {
            name: "Template Portfolio Instan".to_string(),
            headline: "Buat Kesan Pertama yang Tak Terlupakan".to_string(),
            subheadline: "Tingkatkan personal branding Anda".to_string(),
            description: "Portfolio profesional dalam hitungan menit".to_string(),
            features: vec![],
            price: 149_000,
            image_url: "https://example.com/template.png".to_string(),
            active,
        })
        .unwrap()
    }

    fn checkout_params(product_id: Uuid) -> CreateOrderParams {
        CreateOrderParams {
            customer_name: "Budi Santoso".to_string(),
            customer_email: "budi@example.com".to_string(),
            product_id,
            user_id: None,
        }
    }

    #[tokio::test]
    async fn should_place_pending_order_with_snapshot_price() {
        let product = catalog_product(true);
        let product_id = product.id;

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(product.clone()));

        let mut order_repo = MockOrderRepo::new();
        order_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(order_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let order = use_case.execute(checkout_params(product_id)).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.price, 149_000);
        assert_eq!(order.product_name, "Template Portfolio Instan");
    }

    #[tokio::test]
    async fn should_reject_order_for_inactive_product() {
        let product = catalog_product(false);
        let product_id = product.id;

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(product.clone()));

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(MockOrderRepo::new()),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(checkout_params(product_id)).await;

        assert!(matches!(result, Err(OrderError::ProductInactive)));
    }

    #[tokio::test]
    async fn should_reject_order_for_unknown_product() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(MockOrderRepo::new()),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(checkout_params(Uuid::new_v4())).await;

        assert!(matches!(result, Err(OrderError::ProductNotFound)));
    }
}
