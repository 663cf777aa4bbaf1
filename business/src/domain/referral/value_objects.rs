use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferralStatus {
    Pending,
    Completed,
    Canceled,
}

impl std::fmt::Display for ReferralStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferralStatus::Pending => write!(f, "pending"),
            ReferralStatus::Completed => write!(f, "completed"),
            ReferralStatus::Canceled => write!(f, "canceled"),
        }
    }
}

impl std::str::FromStr for ReferralStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReferralStatus::Pending),
            "completed" => Ok(ReferralStatus::Completed),
            "canceled" => Ok(ReferralStatus::Canceled),
            _ => Err(format!("Invalid referral status: {}", s)),
        }
    }
}
