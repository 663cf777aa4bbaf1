#[derive(Debug, thiserror::Error)]
pub enum ReferralError {
    #[error("referral.referrer_name_too_short")]
    ReferrerNameTooShort,
    #[error("referral.invalid_email")]
    InvalidEmail,
    #[error("referral.commission_negative")]
    CommissionNegative,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
