use async_trait::async_trait;

use crate::domain::headline::errors::HeadlineError;
use crate::domain::headline::model::HeadlineSuggestions;
use crate::domain::shared::value_objects::UserId;

pub struct GenerateHeadlinesParams {
    pub user_id: UserId,
    pub product_description: String,
    pub current_headline: Option<String>,
}

#[async_trait]
pub trait GenerateHeadlinesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GenerateHeadlinesParams,
    ) -> Result<HeadlineSuggestions, HeadlineError>;
}
