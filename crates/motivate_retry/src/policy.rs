//! Fixed-interval retry policy.

use derive_getters::Getters;
use motivate_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::future::Future;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::FixedInterval};
use tracing::{debug, instrument, warn};

/// How many times to try an operation and how long to wait in between.
///
/// Each call to [`RetryPolicy::run`] starts with a fresh budget; nothing is
/// shared between invocations. There is no exponential growth and no jitter.
///
/// # Examples
///
/// ```
/// use motivate_retry::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(*policy.max_attempts(), 3);
/// assert_eq!(policy.backoff(), Duration::from_secs(2));
///
/// let fast = RetryPolicy::immediate(3);
/// assert_eq!(fast.backoff(), Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,

    /// Pause between consecutive attempts, in milliseconds.
    #[serde(default = "default_backoff_ms")]
    backoff_ms: u64,
}

fn default_max_attempts() -> usize {
    RetryPolicy::DEFAULT_MAX_ATTEMPTS
}

fn default_backoff_ms() -> u64 {
    RetryPolicy::DEFAULT_BACKOFF_MS
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            backoff_ms: Self::DEFAULT_BACKOFF_MS,
        }
    }
}

/// The last error once every attempt has failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryExhausted<E> {
    /// Error returned by the final attempt
    pub last_error: E,
    /// Number of attempts made
    pub attempts: usize,
}

impl RetryPolicy {
    /// Attempts made when nothing is configured.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

    /// Pause between attempts when nothing is configured.
    pub const DEFAULT_BACKOFF_MS: u64 = 2000;

    /// Policy with explicit limits.
    pub fn new(max_attempts: usize, backoff_ms: u64) -> Self {
        Self {
            max_attempts,
            backoff_ms,
        }
    }

    /// Policy that retries without waiting.
    pub fn immediate(max_attempts: usize) -> Self {
        Self::new(max_attempts, 0)
    }

    /// Policy that makes exactly one attempt.
    pub fn single_attempt() -> Self {
        Self::new(1, 0)
    }

    /// Pause between attempts.
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    /// Check that the policy can make at least one attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::new("retry max_attempts must be at least 1"));
        }
        Ok(())
    }

    /// Delays before the second, third, ... attempt.
    fn delays(&self) -> impl Iterator<Item = Duration> {
        FixedInterval::from_millis(self.backoff_ms).take(self.max_attempts.saturating_sub(1))
    }

    /// Run `action` until it succeeds or the attempt budget is spent.
    ///
    /// `action` receives the 1-based attempt number. Every error is treated
    /// as transient; each failure is logged before the pause. A zero
    /// `max_attempts` still makes one attempt.
    ///
    /// # Errors
    ///
    /// Returns the final attempt's error together with the attempt count.
    #[instrument(skip(self, action), fields(max_attempts = self.max_attempts, backoff_ms = self.backoff_ms))]
    pub async fn run<T, E, F, Fut>(
        &self,
        operation: &'static str,
        mut action: F,
    ) -> Result<T, RetryExhausted<E>>
    where
        F: FnMut(usize) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display + Debug,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempts = 0usize;

        let result = Retry::spawn(self.delays(), || {
            attempts += 1;
            let attempt = attempts;
            let fut = action(attempt);
            async move {
                match fut.await {
                    Ok(value) => {
                        debug!(operation, attempt, "Attempt succeeded");
                        Ok(value)
                    }
                    Err(err) => {
                        warn!(
                            operation,
                            attempt,
                            max_attempts,
                            error = %err,
                            "Attempt failed"
                        );
                        Err(RetryError::Transient {
                            err,
                            retry_after: None,
                        })
                    }
                }
            }
        })
        .await;

        result.map_err(|last_error| RetryExhausted {
            last_error,
            attempts,
        })
    }
}
