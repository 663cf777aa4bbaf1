use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::referral::model::Referral;
use business::domain::referral::value_objects::ReferralStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ReferralStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "completed")]
    Completed,
    #[oai(rename = "canceled")]
    Canceled,
}

impl From<ReferralStatus> for ReferralStatusDto {
    fn from(s: ReferralStatus) -> Self {
        match s {
            ReferralStatus::Pending => ReferralStatusDto::Pending,
            ReferralStatus::Completed => ReferralStatusDto::Completed,
            ReferralStatus::Canceled => ReferralStatusDto::Canceled,
        }
    }
}

impl From<ReferralStatusDto> for ReferralStatus {
    fn from(s: ReferralStatusDto) -> Self {
        match s {
            ReferralStatusDto::Pending => ReferralStatus::Pending,
            ReferralStatusDto::Completed => ReferralStatus::Completed,
            ReferralStatusDto::Canceled => ReferralStatus::Canceled,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateReferralRequest {
    /// Name of the person who made the referral
    pub referrer_name: String,
    /// Email address of the referred customer
    pub referred_email: String,
    /// Commission owed, in integer Rupiah
    pub commission: i64,
    pub status: ReferralStatusDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ReferralResponse {
    /// Referral unique identifier
    pub id: Uuid,
    /// UID of the admin who recorded the referral
    pub referrer_id: String,
    /// Name of the person who made the referral
    pub referrer_name: String,
    /// Email address of the referred customer
    pub referred_email: String,
    /// Commission owed, in integer Rupiah
    pub commission: i64,
    pub status: ReferralStatusDto,
    /// Recording timestamp
    pub referral_date: DateTime<Utc>,
}

impl From<Referral> for ReferralResponse {
    fn from(r: Referral) -> Self {
        Self {
            id: r.id,
            referrer_id: r.referrer_id.to_string(),
            referrer_name: r.referrer_name,
            referred_email: r.referred_email.to_string(),
            commission: r.commission,
            status: r.status.into(),
            referral_date: r.referral_date,
        }
    }
}
