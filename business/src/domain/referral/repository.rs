use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Referral;

#[async_trait]
pub trait ReferralRepository: Send + Sync {
    /// Referrals sorted newest first.
    async fn get_all(&self) -> Result<Vec<Referral>, RepositoryError>;
    async fn save(&self, referral: &Referral) -> Result<(), RepositoryError>;
}
