use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::voucher::model::Voucher;
use business::domain::voucher::repository::VoucherRepository;

use super::entity::VoucherEntity;

pub struct VoucherRepositoryPostgres {
    pool: PgPool,
}

impl VoucherRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoucherRepository for VoucherRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Voucher>, RepositoryError> {
        let entities = sqlx::query_as::<_, VoucherEntity>(
            "SELECT id, code, discount_type, discount_value, expiry_date, is_active, usage_count, created_at FROM vouchers ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Voucher, RepositoryError> {
        let entity = sqlx::query_as::<_, VoucherEntity>(
            "SELECT id, code, discount_type, discount_value, expiry_date, is_active, usage_count, created_at FROM vouchers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_code(&self, code: &str) -> Result<Voucher, RepositoryError> {
        let entity = sqlx::query_as::<_, VoucherEntity>(
            "SELECT id, code, discount_type, discount_value, expiry_date, is_active, usage_count, created_at FROM vouchers WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, voucher: &Voucher) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO vouchers (id, code, discount_type, discount_value, expiry_date, is_active, usage_count, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                discount_type = EXCLUDED.discount_type,
                discount_value = EXCLUDED.discount_value,
                expiry_date = EXCLUDED.expiry_date,
                is_active = EXCLUDED.is_active,
                usage_count = EXCLUDED.usage_count"#,
        )
        .bind(voucher.id)
        .bind(&voucher.code)
        .bind(voucher.discount_type.to_string())
        .bind(voucher.discount_value)
        .bind(voucher.expiry_date)
        .bind(voucher.is_active)
        .bind(voucher.usage_count as i32)
        .bind(voucher.created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            if err
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                RepositoryError::Duplicated
            } else {
                RepositoryError::DatabaseError
            }
        })?;

        Ok(())
    }
}
