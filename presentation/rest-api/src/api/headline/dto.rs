use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::headline::model::HeadlineSuggestions;

#[derive(Debug, Clone, Object)]
pub struct GenerateHeadlinesRequest {
    /// Description of the product the headlines should sell
    pub product_description: String,
    /// Headline currently on the landing page, used only to steer the
    /// model away from repeating it
    pub current_headline: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HeadlineSuggestionsResponse {
    /// Alternative headlines, in the model's own order
    pub suggested_headlines: Vec<String>,
    /// Generation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<HeadlineSuggestions> for HeadlineSuggestionsResponse {
    fn from(s: HeadlineSuggestions) -> Self {
        Self {
            suggested_headlines: s.headlines,
            created_at: s.created_at,
        }
    }
}

/// Error body for a rejected generation call, carrying retry-after info.
#[derive(Debug, Clone, Object)]
pub struct RateLimitedResponse {
    pub name: String,
    pub message: String,
    /// Seconds until the current window resets
    pub retry_after_secs: u64,
}

#[derive(Debug, Clone, Object)]
pub struct ApplyHeadlineRequest {
    /// The chosen suggestion to persist on the product
    pub headline: String,
}
