use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::model::Voucher;
use crate::domain::voucher::repository::VoucherRepository;
use crate::domain::voucher::use_cases::get_all::GetAllVouchersUseCase;

pub struct GetAllVouchersUseCaseImpl {
    pub repository: Arc<dyn VoucherRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllVouchersUseCase for GetAllVouchersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Voucher>, VoucherError> {
        let vouchers = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Fetched {} vouchers", vouchers.len()));
        Ok(vouchers)
    }
}
