use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::voucher::model::Voucher;
use business::domain::voucher::value_objects::DiscountType;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum DiscountTypeDto {
    #[oai(rename = "percentage")]
    Percentage,
    #[oai(rename = "fixed")]
    Fixed,
}

impl From<DiscountType> for DiscountTypeDto {
    fn from(d: DiscountType) -> Self {
        match d {
            DiscountType::Percentage => DiscountTypeDto::Percentage,
            DiscountType::Fixed => DiscountTypeDto::Fixed,
        }
    }
}

impl From<DiscountTypeDto> for DiscountType {
    fn from(d: DiscountTypeDto) -> Self {
        match d {
            DiscountTypeDto::Percentage => DiscountType::Percentage,
            DiscountTypeDto::Fixed => DiscountType::Fixed,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateVoucherRequest {
    /// Uppercase alphanumeric code, at least 5 characters
    pub code: String,
    pub discount_type: DiscountTypeDto,
    /// Percentage (1-100) or fixed amount in Rupiah
    pub discount_value: i64,
    pub expiry_date: DateTime<Utc>,
    #[oai(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Clone, Object)]
pub struct SetVoucherActiveRequest {
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct GeneratedCodeResponse {
    /// A fresh random voucher code
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct VoucherResponse {
    /// Voucher unique identifier
    pub id: Uuid,
    /// Customer-facing discount code
    pub code: String,
    pub discount_type: DiscountTypeDto,
    /// Percentage (1-100) or fixed amount in Rupiah
    pub discount_value: i64,
    /// Expiry timestamp
    pub expiry_date: DateTime<Utc>,
    /// Whether the code can currently be redeemed
    pub is_active: bool,
    /// Number of redemptions so far
    pub usage_count: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Voucher> for VoucherResponse {
    fn from(v: Voucher) -> Self {
        Self {
            id: v.id,
            code: v.code,
            discount_type: v.discount_type.into(),
            discount_value: v.discount_value,
            expiry_date: v.expiry_date,
            is_active: v.is_active,
            usage_count: v.usage_count,
            created_at: v.created_at,
        }
    }
}
