use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

pub struct UpdateOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        let mut order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        order.set_status(params.status.clone());
        self.repository.save(&order).await?;

        self.logger.info(&format!(
            "Order {} marked as {}",
            order.id, params.status
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::model::NewOrderProps;
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

    fn pending_order() -> Order {
        let product = Product::new(NewProductProps {
            name: "Template Portfolio Instan".to_string(),
            headline: "Buat Kesan Pertama yang Tak Terlupakan".to_string(),
            subheadline: "Tingkatkan personal branding Anda".to_string(),
            description: "Portfolio profesional dalam hitungan menit".to_string(),
            features: vec![],
            price: 149_000,
            image_url: "https://example.com/template.png".to_string(),
            active: true,
        })
        .unwrap();

        Order::place(
            NewOrderProps {
                customer_name: "Budi Santoso".to_string(),
                customer_email: "budi@example.com".to_string(),
                user_id: None,
            },
            &product,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_move_order_to_processed() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(pending_order()));
        mock_repo
            .expect_save()
            .withf(|o| o.status == OrderStatus::Processed)
            .returning(|_| Ok(()));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: Uuid::new_v4(),
                status: OrderStatus::Processed,
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().status, OrderStatus::Processed);
    }

    #[tokio::test]
    async fn should_reject_status_update_for_unknown_order() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: Uuid::new_v4(),
                status: OrderStatus::Completed,
            })
            .await;

        assert!(matches!(result, Err(OrderError::NotFound)));
    }
}
