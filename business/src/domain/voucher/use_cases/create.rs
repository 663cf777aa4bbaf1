use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::model::Voucher;
use crate::domain::voucher::value_objects::DiscountType;

pub struct CreateVoucherParams {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: i64,
    pub expiry_date: DateTime<Utc>,
    pub is_active: bool,
}

#[async_trait]
pub trait CreateVoucherUseCase: Send + Sync {
    async fn execute(&self, params: CreateVoucherParams) -> Result<Voucher, VoucherError>;
}
