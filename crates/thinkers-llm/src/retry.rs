//! Bounded retry with backoff for transient generation failures.
//!
//! Only [`LlmError::is_transient`] failures are retried. Permanent
//! failures (auth, invalid request, unusable response) surface on the
//! first attempt. Sleeping goes through [`Sleeper`] so callers can
//! substitute a fake clock.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::LlmError;

/// Spacing between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Always wait `base_delay`.
    Fixed,
    /// Wait `base_delay * 2^n`, capped at `max_delay`.
    Exponential,
}

/// Configuration for retry behavior on transient API errors.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff and server hints are capped here).
    pub max_delay: Duration,
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(30),
            backoff: Backoff::Exponential,
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay after the `retry`-th failed attempt (0-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let delay = match self.backoff {
            Backoff::Fixed => self.base_delay,
            Backoff::Exponential => self
                .base_delay
                .saturating_mul(2u32.saturating_pow(retry)),
        };
        delay.min(self.max_delay)
    }

    fn delay_after(&self, retry: u32, err: &LlmError) -> Duration {
        match err.retry_after() {
            Some(hint) => hint.min(self.max_delay),
            None => self.delay_for(retry),
        }
    }
}

/// Something that can wait.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real-time sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Run `op` until it succeeds, fails permanently, or the policy's attempt
/// budget is spent. `op` receives the 1-based attempt number.
pub async fn with_retry<T, F, Fut, S>(
    policy: &RetryPolicy,
    sleeper: &S,
    mut op: F,
) -> Result<T, LlmError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, LlmError>>,
    S: Sleeper + ?Sized,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && attempt < max_attempts => {
                let delay = policy.delay_after(attempt - 1, &err);
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "transient failure, retrying"
                );
                sleeper.sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSleeper {
        slept: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.slept.lock().unwrap().push(duration);
        }
    }

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(350),
            backoff: Backoff::Exponential,
        }
    }

    #[test]
    fn test_exponential_delays_are_capped() {
        let p = policy(5);
        assert_eq!(p.delay_for(0), Duration::from_millis(100));
        assert_eq!(p.delay_for(1), Duration::from_millis(200));
        assert_eq!(p.delay_for(2), Duration::from_millis(350));
        assert_eq!(p.delay_for(40), Duration::from_millis(350));
    }

    #[test]
    fn test_fixed_delays() {
        let p = RetryPolicy {
            backoff: Backoff::Fixed,
            ..policy(3)
        };
        assert_eq!(p.delay_for(0), p.delay_for(3));
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);

        let result = with_retry(&policy(3), &sleeper, |_| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(LlmError::Transient("timeout".into()))
                } else {
                    Ok("essay")
                }
            }
        })
        .await;

        assert_eq!(result, Ok("essay"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(
            *sleeper.slept.lock().unwrap(),
            vec![Duration::from_millis(100), Duration::from_millis(200)]
        );
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = with_retry(&policy(3), &sleeper, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(LlmError::RateLimited { retry_after: None }) }
        })
        .await;

        assert_eq!(result, Err(LlmError::RateLimited { retry_after: None }));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // no sleep after the final attempt
        assert_eq!(sleeper.slept.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_permanent_failure_is_not_retried() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = with_retry(&policy(5), &sleeper, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(LlmError::Auth("invalid api key".into())) }
        })
        .await;

        assert!(matches!(result, Err(LlmError::Auth(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sleeper.slept.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_retry_after_hint_overrides_backoff() {
        let sleeper = RecordingSleeper::default();

        let _ = with_retry(&policy(2), &sleeper, |attempt| async move {
            if attempt == 1 {
                Err(LlmError::RateLimited {
                    retry_after: Some(Duration::from_millis(250)),
                })
            } else {
                Ok(())
            }
        })
        .await;

        assert_eq!(
            *sleeper.slept.lock().unwrap(),
            vec![Duration::from_millis(250)]
        );
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);

        let _: Result<(), _> = with_retry(&policy(0), &sleeper, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(LlmError::Transient("x".into())) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
