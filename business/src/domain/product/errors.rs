#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.headline_empty")]
    HeadlineEmpty,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
