use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::model::Voucher;

pub struct SetVoucherActiveParams {
    pub id: Uuid,
    pub is_active: bool,
}

#[async_trait]
pub trait SetVoucherActiveUseCase: Send + Sync {
    async fn execute(&self, params: SetVoucherActiveParams) -> Result<Voucher, VoucherError>;
}
