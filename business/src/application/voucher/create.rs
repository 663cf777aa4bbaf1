use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::model::{NewVoucherProps, Voucher};
use crate::domain::voucher::repository::VoucherRepository;
use crate::domain::voucher::use_cases::create::{CreateVoucherParams, CreateVoucherUseCase};

pub struct CreateVoucherUseCaseImpl {
    pub repository: Arc<dyn VoucherRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateVoucherUseCase for CreateVoucherUseCaseImpl {
    async fn execute(&self, params: CreateVoucherParams) -> Result<Voucher, VoucherError> {
        let voucher = Voucher::new(NewVoucherProps {
            code: params.code,
            discount_type: params.discount_type,
            discount_value: params.discount_value,
            expiry_date: params.expiry_date,
            is_active: params.is_active,
        })?;

        // Codes are customer-facing; two vouchers must never share one.
        match self.repository.get_by_code(&voucher.code).await {
            Ok(_) => return Err(VoucherError::DuplicatedCode),
            Err(RepositoryError::NotFound) => {}
            Err(other) => return Err(VoucherError::Repository(other)),
        }

        self.repository.save(&voucher).await?;

        self.logger
            .info(&format!("Voucher {} created", voucher.code));
        Ok(voucher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn valid_params() -> CreateVoucherParams {
        CreateVoucherParams {
            code: "DISKON10".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
            expiry_date: Utc::now() + Duration::days(30),
            is_active: true,
        }
    }

    fn existing_voucher() -> Voucher {
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
    async fn should_create_voucher_when_code_is_unused() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo
            .expect_get_by_code()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateVoucherUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().code, "DISKON10");
    }

    #[tokio::test]
    async fn should_reject_duplicate_code() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo
            .expect_get_by_code()
            .returning(|_| Ok(existing_voucher()));

        let use_case = CreateVoucherUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(result, Err(VoucherError::DuplicatedCode)));
    }

    #[tokio::test]
    async fn should_reject_invalid_code_before_touching_repository() {
        let mock_repo = MockVoucherRepo::new();

        let use_case = CreateVoucherUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut params = valid_params();
        params.code = "ab".to_string();
        let result = use_case.execute(params).await;

        assert!(matches!(result, Err(VoucherError::CodeTooShort)));
    }
}
