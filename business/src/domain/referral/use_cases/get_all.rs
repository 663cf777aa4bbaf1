use async_trait::async_trait;

use crate::domain::referral::errors::ReferralError;
use crate::domain::referral::model::Referral;

#[async_trait]
pub trait GetAllReferralsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Referral>, ReferralError>;
}
