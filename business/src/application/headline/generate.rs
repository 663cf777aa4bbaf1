use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::headline::errors::HeadlineError;
use crate::domain::headline::model::{
    HeadlineRequest, HeadlineSuggestions, SUGGESTION_TARGET, sanitize_headlines,
};
use crate::domain::headline::rate_limit::{FixedWindowLimiter, RateLimitScope};
use crate::domain::headline::services::HeadlineGeneratorService;
use crate::domain::headline::use_cases::generate::{
    GenerateHeadlinesParams, GenerateHeadlinesUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

/// Limiter key when the whole flow shares one window.
const GLOBAL_LIMITER_KEY: &str = "headline:generate";

pub struct GenerateHeadlinesUseCaseImpl {
    pub generator: Arc<dyn HeadlineGeneratorService>,
    pub limiter: Arc<FixedWindowLimiter>,
    pub scope: RateLimitScope,
    pub logger: Arc<dyn Logger>,
}

impl GenerateHeadlinesUseCaseImpl {
    fn limiter_key(&self, user_id: &UserId) -> String {
        match self.scope {
            RateLimitScope::Global => GLOBAL_LIMITER_KEY.to_string(),
            RateLimitScope::PerUser => format!("headline:generate:{}", user_id),
        }
    }
}

#[async_trait]
impl GenerateHeadlinesUseCase for GenerateHeadlinesUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateHeadlinesParams,
    ) -> Result<HeadlineSuggestions, HeadlineError> {
        let key = self.limiter_key(&params.user_id);

        // Validation first: an invalid request must not consume quota.
        let request = HeadlineRequest::new(params.product_description, params.current_headline)?;

        self.limiter
            .try_acquire(&key)
            .map_err(|retry_after| HeadlineError::RateLimitExceeded { retry_after })?;

        self.logger.info(&format!(
            "Generating headline suggestions for admin {}",
            params.user_id
        ));

        let raw = self.generator.generate(&request).await?;
        let headlines = sanitize_headlines(raw, request.current_headline.as_deref());

        if headlines.len() < SUGGESTION_TARGET {
            self.logger.warn(&format!(
                "Model produced {} usable headlines, wanted {}",
                headlines.len(),
                SUGGESTION_TARGET
            ));
        }

        Ok(HeadlineSuggestions {
            headlines,
            created_at: Utc::now(),
        })
    }
}
