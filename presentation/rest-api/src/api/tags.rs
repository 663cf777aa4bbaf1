use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Headlines,
    Products,
    Orders,
    Vouchers,
    Referrals,
}
