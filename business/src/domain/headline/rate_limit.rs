use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How limiter keys are derived for the headline flow.
///
/// The generation flow ships with one shared window; per-admin keys are a
/// configuration choice, not a code change.
#[derive(Debug, Clone, PartialEq)]
pub enum RateLimitScope {
    Global,
    PerUser,
}

impl std::str::FromStr for RateLimitScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(RateLimitScope::Global),
            "per_user" => Ok(RateLimitScope::PerUser),
            _ => Err(format!("Invalid rate limit scope: {}", s)),
        }
    }
}

struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed-window counting limiter.
///
/// Counts admissions per key in consecutive non-overlapping windows; the
/// count resets lazily when a call arrives after the window has elapsed.
/// Check and increment happen under a single lock acquisition, so concurrent
/// callers can never admit more than `limit` calls per window. A caller can
/// still burst `limit` calls at the end of one window and `limit` more right
/// after the boundary; that is inherent to fixed windows and accepted here.
pub struct FixedWindowLimiter {
    limit: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl FixedWindowLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Admits the call and counts it, or rejects with the time until the
    /// current window resets.
    pub fn try_acquire(&self, key: &str) -> Result<(), Duration> {
        let now = Instant::now();
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let window = windows.entry(key.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });

        let elapsed = now.duration_since(window.started_at);
        if elapsed >= self.window {
            window.started_at = now;
            window.count = 0;
        }

        if window.count >= self.limit {
            return Err(self.window.saturating_sub(elapsed));
        }

        window.count += 1;
        Ok(())
    }

    /// Admissions left in the key's current window, without counting a call.
    pub fn remaining(&self, key: &str) -> u32 {
        let windows = self
            .windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match windows.get(key) {
            None => self.limit,
            Some(window) => {
                if window.started_at.elapsed() >= self.window {
                    self.limit
                } else {
                    self.limit.saturating_sub(window.count)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_admit_up_to_limit_and_reject_next() {
        let limiter = FixedWindowLimiter::new(5, Duration::from_secs(60));

        for _ in 0..5 {
            assert!(limiter.try_acquire("headline").is_ok());
        }

        let rejection = limiter.try_acquire("headline");
        assert!(rejection.is_err());
        assert!(rejection.unwrap_err() <= Duration::from_secs(60));
    }

    #[test]
    fn should_admit_again_after_window_elapses() {
        let limiter = FixedWindowLimiter::new(2, Duration::from_millis(40));

        assert!(limiter.try_acquire("headline").is_ok());
        assert!(limiter.try_acquire("headline").is_ok());
        assert!(limiter.try_acquire("headline").is_err());

        std::thread::sleep(Duration::from_millis(50));

        assert!(limiter.try_acquire("headline").is_ok());
    }

    #[test]
    fn should_track_keys_independently() {
        let limiter = FixedWindowLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.try_acquire("admin-a").is_ok());
        assert!(limiter.try_acquire("admin-b").is_ok());
        assert!(limiter.try_acquire("admin-a").is_err());
    }

    #[test]
    fn should_report_remaining_without_consuming() {
        let limiter = FixedWindowLimiter::new(5, Duration::from_secs(60));

        assert_eq!(limiter.remaining("headline"), 5);
        limiter.try_acquire("headline").unwrap();
        assert_eq!(limiter.remaining("headline"), 4);
        assert_eq!(limiter.remaining("headline"), 4);
    }

    #[test]
    fn should_never_admit_more_than_limit_under_contention() {
        let limit = 5u32;
        let extra = 8usize;
        let limiter = Arc::new(FixedWindowLimiter::new(limit, Duration::from_secs(60)));

        let handles: Vec<_> = (0..(limit as usize + extra))
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                std::thread::spawn(move || limiter.try_acquire("headline").is_ok())
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&admitted| admitted)
            .count();

        assert_eq!(admitted, limit as usize);
    }

    #[test]
    fn should_parse_scope_from_configuration_value() {
        assert_eq!(
            "global".parse::<RateLimitScope>().unwrap(),
            RateLimitScope::Global
        );
        assert_eq!(
            "per_user".parse::<RateLimitScope>().unwrap(),
            RateLimitScope::PerUser
        );
        assert!("sliding".parse::<RateLimitScope>().is_err());
    }
}
