use std::time::Duration;

use business::domain::headline::rate_limit::RateLimitScope;

/// Rate-limit configuration for the headline generation flow.
///
/// Environment variables:
/// - HEADLINE_RATE_LIMIT: calls admitted per window (default: 5)
/// - HEADLINE_RATE_WINDOW_SECS: window length in seconds (default: 60)
/// - HEADLINE_RATE_SCOPE: "global" shares one window across every admin,
///   "per_user" gives each admin their own (default: "global")
pub struct HeadlineConfig {
    pub rate_limit: u32,
    pub rate_window: Duration,
    pub rate_scope: RateLimitScope,
}

impl HeadlineConfig {
    pub fn from_env() -> Self {
        let rate_limit = std::env::var("HEADLINE_RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);
        let window_secs = std::env::var("HEADLINE_RATE_WINDOW_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);
        let rate_scope = std::env::var("HEADLINE_RATE_SCOPE")
            .ok()
            .and_then(|v| v.parse::<RateLimitScope>().ok())
            .unwrap_or(RateLimitScope::Global);

        Self {
            rate_limit,
            rate_window: Duration::from_secs(window_secs),
            rate_scope,
        }
    }
}
