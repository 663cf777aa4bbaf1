use std::time::Duration;

/// Failures of the headline suggestion flow.
///
/// `DescriptionEmpty` and `RateLimitExceeded` are the caller's fault;
/// `UpstreamUnavailable` and `MalformedModelOutput` are the service's fault.
/// The flow never retries on its own, the admin UI offers a manual retry.
#[derive(Debug, thiserror::Error)]
pub enum HeadlineError {
    #[error("headline.description_empty")]
    DescriptionEmpty,
    #[error("headline.rate_limit_exceeded")]
    RateLimitExceeded { retry_after: Duration },
    #[error("headline.upstream_unavailable")]
    UpstreamUnavailable,
    #[error("headline.malformed_model_output")]
    MalformedModelOutput,
}
