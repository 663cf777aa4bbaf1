use async_trait::async_trait;

use crate::domain::referral::errors::ReferralError;
use crate::domain::referral::model::Referral;
use crate::domain::referral::value_objects::ReferralStatus;
use crate::domain::shared::value_objects::UserId;

pub struct CreateReferralParams {
    pub referrer_id: UserId,
    pub referrer_name: String,
    pub referred_email: String,
    pub commission: i64,
    pub status: ReferralStatus,
}

#[async_trait]
pub trait CreateReferralUseCase: Send + Sync {
    async fn execute(&self, params: CreateReferralParams) -> Result<Referral, ReferralError>;
}
