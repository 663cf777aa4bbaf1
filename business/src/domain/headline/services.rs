use async_trait::async_trait;

use super::errors::HeadlineError;
use super::model::HeadlineRequest;

/// Service port for the hosted text-generation provider.
///
/// One request, one response; the adapter owns prompt assembly, the output
/// schema, and the content-safety configuration. Returns the model's own
/// strings after schema validation, before any structural post-validation.
#[async_trait]
pub trait HeadlineGeneratorService: Send + Sync {
    async fn generate(&self, request: &HeadlineRequest) -> Result<Vec<String>, HeadlineError>;
}
