use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::model::Voucher;
use crate::domain::voucher::repository::VoucherRepository;
use crate::domain::voucher::use_cases::set_active::{
    SetVoucherActiveParams, SetVoucherActiveUseCase,
};

pub struct SetVoucherActiveUseCaseImpl {
    pub repository: Arc<dyn VoucherRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetVoucherActiveUseCase for SetVoucherActiveUseCaseImpl {
    async fn execute(&self, params: SetVoucherActiveParams) -> Result<Voucher, VoucherError> {
        let mut voucher = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => VoucherError::NotFound,
                other => VoucherError::Repository(other),
            })?;

        voucher.set_active(params.is_active);
        self.repository.save(&voucher).await?;

        self.logger.info(&format!(
            "Voucher {} is now {}",
            voucher.code,
            if voucher.is_active { "active" } else { "inactive" }
        ));
        Ok(voucher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voucher::model::NewVoucherProps;
    use crate::domain::voucher::value_objects::DiscountType;
    use chrono::{Duration, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub VoucherRepo {}

        #[async_trait]
        impl VoucherRepository for VoucherRepo {
            async fn get_all(&self) -> Result<Vec<Voucher>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Voucher, RepositoryError>;
            async fn get_by_code(&self, code: &str) -> Result<Voucher, RepositoryError>;
            async fn save(&self, voucher: &Voucher) -> Result<(), RepositoryError>;
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

    fn active_voucher() -> Voucher {
        Voucher::new(NewVoucherProps {
            code: "DISKON10".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
            expiry_date: Utc::now() + Duration::days(30),
            is_active: true,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_deactivate_voucher() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(active_voucher()));
        mock_repo
            .expect_save()
            .withf(|v| !v.is_active)
            .returning(|_| Ok(()));

        let use_case = SetVoucherActiveUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetVoucherActiveParams {
                id: Uuid::new_v4(),
                is_active: false,
            })
            .await;

        assert!(result.is_ok());
        assert!(!result.unwrap().is_active);
    }

    #[tokio::test]
    async fn should_reject_toggle_for_unknown_voucher() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = SetVoucherActiveUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetVoucherActiveParams {
                id: Uuid::new_v4(),
                is_active: false,
            })
            .await;

        assert!(matches!(result, Err(VoucherError::NotFound)));
    }
}
