use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::referral::model::Referral;
use business::domain::referral::repository::ReferralRepository;

use super::entity::ReferralEntity;

pub struct ReferralRepositoryPostgres {
    pool: PgPool,
}

impl ReferralRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferralRepository for ReferralRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Referral>, RepositoryError> {
        let entities = sqlx::query_as::<_, ReferralEntity>(
            "SELECT id, referrer_id, referrer_name, referred_email, commission, status, referral_date FROM referrals ORDER BY referral_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, referral: &Referral) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO referrals (id, referrer_id, referrer_name, referred_email, commission, status, referral_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                referrer_name = EXCLUDED.referrer_name,
                referred_email = EXCLUDED.referred_email,
                commission = EXCLUDED.commission,
                status = EXCLUDED.status"#,
        )
        .bind(referral.id)
        .bind(referral.referrer_id.as_str())
        .bind(&referral.referrer_name)
        .bind(referral.referred_email.as_str())
        .bind(referral.commission)
        .bind(referral.status.to_string())
        .bind(referral.referral_date)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
