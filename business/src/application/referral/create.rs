use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::referral::errors::ReferralError;
use crate::domain::referral::model::{NewReferralProps, Referral};
use crate::domain::referral::repository::ReferralRepository;
use crate::domain::referral::use_cases::create::{CreateReferralParams, CreateReferralUseCase};

pub struct CreateReferralUseCaseImpl {
    pub repository: Arc<dyn ReferralRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateReferralUseCase for CreateReferralUseCaseImpl {
    async fn execute(&self, params: CreateReferralParams) -> Result<Referral, ReferralError> {
        let referral = Referral::new(NewReferralProps {
            referrer_id: params.referrer_id,
            referrer_name: params.referrer_name,
            referred_email: params.referred_email,
            commission: params.commission,
            status: params.status,
        })?;

        self.repository.save(&referral).await?;

        self.logger.info(&format!(
            "Referral recorded for {}",
            referral.referred_email
        ));
        Ok(referral)
    }
}
