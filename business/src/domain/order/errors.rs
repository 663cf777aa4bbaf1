#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.customer_name_too_short")]
    CustomerNameTooShort,
    #[error("order.invalid_email")]
    InvalidEmail,
    #[error("order.product_not_found")]
    ProductNotFound,
    #[error("order.product_inactive")]
    ProductInactive,
    #[error("order.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
