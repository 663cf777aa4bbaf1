use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Voucher;

#[async_trait]
pub trait VoucherRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Voucher>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Voucher, RepositoryError>;
    async fn get_by_code(&self, code: &str) -> Result<Voucher, RepositoryError>;
    async fn save(&self, voucher: &Voucher) -> Result<(), RepositoryError>;
}
