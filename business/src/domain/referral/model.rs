use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ReferralError;
use super::value_objects::ReferralStatus;
use crate::domain::shared::value_objects::{EmailAddress, UserId};

const MIN_REFERRER_NAME_CHARS: usize = 2;

/// A recorded referral with its commission, tracked by the admin dashboard.
#[derive(Debug, Clone)]
pub struct Referral {
    pub id: Uuid,
    pub referrer_id: UserId,
    pub referrer_name: String,
    pub referred_email: EmailAddress,
    pub commission: i64,
    pub status: ReferralStatus,
    pub referral_date: DateTime<Utc>,
}

pub struct NewReferralProps {
    pub referrer_id: UserId,
    pub referrer_name: String,
    pub referred_email: String,
    pub commission: i64,
    pub status: ReferralStatus,
}

impl Referral {
    pub fn new(props: NewReferralProps) -> Result<Self, ReferralError> {
        let referrer_name = props.referrer_name.trim().to_string();
        if referrer_name.chars().count() < MIN_REFERRER_NAME_CHARS {
            return Err(ReferralError::ReferrerNameTooShort);
        }

        let referred_email =
            EmailAddress::new(props.referred_email).map_err(|_| ReferralError::InvalidEmail)?;

        if props.commission < 0 {
            return Err(ReferralError::CommissionNegative);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            referrer_id: props.referrer_id,
            referrer_name,
            referred_email,
            commission: props.commission,
            status: props.status,
            referral_date: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        referrer_id: UserId,
        referrer_name: String,
        referred_email: EmailAddress,
        commission: i64,
        status: ReferralStatus,
        referral_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            referrer_id,
            referrer_name,
            referred_email,
            commission,
            status,
            referral_date,
        }
    }
}
