use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use rand::Rng;
use regex::Regex;
use uuid::Uuid;

use super::errors::VoucherError;
use super::value_objects::DiscountType;

const MIN_CODE_CHARS: usize = 5;
const GENERATED_CODE_CHARS: usize = 8;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+$").expect("code pattern is valid"));

/// A discount code for the storefront.
#[derive(Debug, Clone)]
pub struct Voucher {
    pub id: Uuid,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: i64,
    pub expiry_date: DateTime<Utc>,
    pub is_active: bool,
    pub usage_count: u32,
    pub created_at: DateTime<Utc>,
}

pub struct NewVoucherProps {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: i64,
    pub expiry_date: DateTime<Utc>,
    pub is_active: bool,
}

impl Voucher {
    pub fn new(props: NewVoucherProps) -> Result<Self, VoucherError> {
        let code = props.code.trim().to_string();
        if code.chars().count() < MIN_CODE_CHARS {
            return Err(VoucherError::CodeTooShort);
        }
        if !CODE_PATTERN.is_match(&code) {
            return Err(VoucherError::CodeInvalidCharacters);
        }
        if props.discount_value <= 0 {
            return Err(VoucherError::DiscountNotPositive);
        }
        if props.discount_type == DiscountType::Percentage && props.discount_value > 100 {
            return Err(VoucherError::PercentageOverHundred);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            code,
            discount_type: props.discount_type,
            discount_value: props.discount_value,
            expiry_date: props.expiry_date,
            is_active: props.is_active,
            usage_count: 0,
            created_at: Utc::now(),
        })
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        code: String,
        discount_type: DiscountType,
        discount_value: i64,
        expiry_date: DateTime<Utc>,
        is_active: bool,
        usage_count: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            discount_type,
            discount_value,
            expiry_date,
            is_active,
            usage_count,
            created_at,
        }
    }
}

/// Random voucher code for the admin "generate" button: 8 uppercase
/// alphanumeric characters.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..GENERATED_CODE_CHARS)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn valid_props() -> NewVoucherProps {
        NewVoucherProps {
            code: "DISKON10".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
            expiry_date: Utc::now() + Duration::days(30),
            is_active: true,
        }
    }

    #[test]
    fn should_create_voucher_with_zero_usage() {
        let voucher = Voucher::new(valid_props()).unwrap();
        assert_eq!(voucher.code, "DISKON10");
        assert_eq!(voucher.usage_count, 0);
    }

    #[test]
    fn should_reject_code_shorter_than_five_characters() {
        let mut props = valid_props();
        props.code = "AB12".to_string();
        assert!(matches!(
            Voucher::new(props),
            Err(VoucherError::CodeTooShort)
        ));
    }

    #[test]
    fn should_reject_lowercase_code() {
        let mut props = valid_props();
        props.code = "diskon10".to_string();
        assert!(matches!(
            Voucher::new(props),
            Err(VoucherError::CodeInvalidCharacters)
        ));
    }

    #[test]
    fn should_reject_percentage_over_one_hundred() {
        let mut props = valid_props();
        props.discount_value = 101;
        assert!(matches!(
            Voucher::new(props),
            Err(VoucherError::PercentageOverHundred)
        ));
    }

    #[test]
    fn should_allow_fixed_discount_over_one_hundred() {
        let mut props = valid_props();
        props.discount_type = DiscountType::Fixed;
        props.discount_value = 25_000;
        assert!(Voucher::new(props).is_ok());
    }

    #[test]
    fn should_reject_zero_discount() {
        let mut props = valid_props();
        props.discount_value = 0;
        assert!(matches!(
            Voucher::new(props),
            Err(VoucherError::DiscountNotPositive)
        ));
    }

    proptest! {
        #[test]
        fn generated_codes_are_always_valid_voucher_codes(_seed in 0u32..64) {
            let code = generate_code();
            prop_assert_eq!(code.chars().count(), 8);
            prop_assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
            let is_ok = Voucher::new(NewVoucherProps {
                code,
                discount_type: DiscountType::Percentage,
                discount_value: 10,
                expiry_date: Utc::now(),
                is_active: true,
            }).is_ok();
            prop_assert!(is_ok);
        }
    }
}
