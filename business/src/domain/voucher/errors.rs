#[derive(Debug, thiserror::Error)]
pub enum VoucherError {
    #[error("voucher.code_too_short")]
    CodeTooShort,
    #[error("voucher.code_invalid_characters")]
    CodeInvalidCharacters,
    #[error("voucher.discount_not_positive")]
    DiscountNotPositive,
    #[error("voucher.percentage_over_hundred")]
    PercentageOverHundred,
    #[error("voucher.duplicated_code")]
    DuplicatedCode,
    #[error("voucher.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
