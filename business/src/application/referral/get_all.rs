use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::referral::errors::ReferralError;
use crate::domain::referral::model::Referral;
use crate::domain::referral::repository::ReferralRepository;
use crate::domain::referral::use_cases::get_all::GetAllReferralsUseCase;

pub struct GetAllReferralsUseCaseImpl {
    pub repository: Arc<dyn ReferralRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllReferralsUseCase for GetAllReferralsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Referral>, ReferralError> {
        let referrals = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Fetched {} referrals", referrals.len()));
        Ok(referrals)
    }
}
