//! Bounded retry with a fixed backoff schedule.
//!
//! The schedule is a table, not inlined exception handling: attempt budget
//! and delays live here, the transient/fatal split lives on `LlmError`.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::LlmError;

/// Backoff delays, indexed by completed attempts. A budget larger than the
/// table reuses the final entry.
const BACKOFF_SCHEDULE: [Duration; 3] = [
    Duration::from_secs(2),
    Duration::from_secs(4),
    Duration::from_secs(8),
];

/// Total attempts, including the first.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// A bounded-retry policy over transient `LlmError`s.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    schedule: &'static [Duration],
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            schedule: &BACKOFF_SCHEDULE,
        }
    }
}

impl RetryPolicy {
    /// Policy with a custom attempt budget over the standard schedule.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            schedule: &BACKOFF_SCHEDULE,
        }
    }

    /// Delay before the next attempt, given how many have completed.
    fn delay_after(&self, completed_attempts: u32) -> Duration {
        let index = (completed_attempts as usize - 1).min(self.schedule.len() - 1);
        self.schedule[index]
    }

    /// Run `op` until it succeeds, fails with a non-transient error, or the
    /// attempt budget runs out. Sleeps the scheduled delay between attempts.
    pub async fn run<T, F, Fut>(&self, op_name: &str, mut op: F) -> Result<T, LlmError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, LlmError>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    let delay = self.delay_after(attempt);
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        delay_secs = delay.as_secs(),
                        error = %e,
                        "Transient failure in {op_name}, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn rate_limited() -> LlmError {
        LlmError::RateLimited {
            provider: "test".into(),
        }
    }

    fn auth_failed() -> LlmError {
        LlmError::AuthFailed {
            provider: "test".into(),
        }
    }

    #[test]
    fn schedule_is_two_four_eight_seconds() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_secs(2));
        assert_eq!(policy.delay_after(2), Duration::from_secs(4));
        assert_eq!(policy.delay_after(3), Duration::from_secs(8));
        // Budgets beyond the table reuse the last entry
        assert_eq!(policy.delay_after(9), Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn transient_failures_retry_until_success() {
        let attempts = AtomicU32::new(0);
        let policy = RetryPolicy::default();

        let result = policy
            .run("test op", || {
                let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if n < 3 {
                        Err(rate_limited())
                    } else {
                        Ok("answer")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "answer");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_budget_returns_last_error() {
        let attempts = AtomicU32::new(0);
        let policy = RetryPolicy::default();

        let result: Result<(), _> = policy
            .run("test op", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(rate_limited()) }
            })
            .await;

        assert!(matches!(result, Err(LlmError::RateLimited { .. })));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_transient_failure_is_not_retried() {
        let attempts = AtomicU32::new(0);
        let policy = RetryPolicy::default();

        let result: Result<(), _> = policy
            .run("test op", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(auth_failed()) }
            })
            .await;

        assert!(matches!(result, Err(LlmError::AuthFailed { .. })));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_delays_accumulate_before_success() {
        let attempts = AtomicU32::new(0);
        let policy = RetryPolicy::default();
        let started = tokio::time::Instant::now();

        let result = policy
            .run("test op", || {
                let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if n < 3 {
                        Err(rate_limited())
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 3);
        // 2s after the first failure + 4s after the second
        assert_eq!(started.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test]
    async fn single_attempt_budget_never_sleeps() {
        let attempts = AtomicU32::new(0);
        let policy = RetryPolicy::with_max_attempts(1);

        let result: Result<(), _> = policy
            .run("test op", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(rate_limited()) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
