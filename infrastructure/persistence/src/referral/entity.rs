use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::referral::model::Referral;
use business::domain::referral::value_objects::ReferralStatus;
use business::domain::shared::value_objects::{EmailAddress, UserId};

#[derive(Debug, FromRow)]
pub struct ReferralEntity {
    pub id: Uuid,
    pub referrer_id: String,
    pub referrer_name: String,
    pub referred_email: String,
    pub commission: i64,
    pub status: String,
    pub referral_date: DateTime<Utc>,
}

impl ReferralEntity {
    pub fn into_domain(self) -> Referral {
        Referral::from_repository(
            self.id,
            UserId::new(self.referrer_id),
            self.referrer_name,
            EmailAddress::from_repository(self.referred_email),
            self.commission,
            self.status
                .parse::<ReferralStatus>()
                .unwrap_or(ReferralStatus::Pending),
            self.referral_date,
        )
    }
}
