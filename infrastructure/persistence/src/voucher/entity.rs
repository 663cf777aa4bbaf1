use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::voucher::model::Voucher;
use business::domain::voucher::value_objects::DiscountType;

#[derive(Debug, FromRow)]
pub struct VoucherEntity {
    pub id: Uuid,
    pub code: String,
    pub discount_type: String,
    pub discount_value: i64,
    pub expiry_date: DateTime<Utc>,
    pub is_active: bool,
    pub usage_count: i32,
    pub created_at: DateTime<Utc>,
}

impl VoucherEntity {
    pub fn into_domain(self) -> Voucher {
        Voucher::from_repository(
            self.id,
            self.code,
            self.discount_type
                .parse::<DiscountType>()
                .unwrap_or(DiscountType::Fixed),
            self.discount_value,
            self.expiry_date,
            self.is_active,
            self.usage_count.max(0) as u32,
            self.created_at,
        )
    }
}
