use std::future::Future;
use tokio::time::sleep;

use crate::error::Result;

/// Caller-side retry loop driven by [`ToolError::retry_after`](crate::ToolError::retry_after).
///
/// Only retryable errors are re-attempted; everything else is returned on the
/// first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Never re-attempt
    pub fn none() -> Self {
        Self::new(1)
    }

    /// Execute an operation, retrying while it reports a retryable failure
    pub async fn run<F, Fut, T>(&self, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    let delay = match error.retry_after() {
                        Some(delay) if attempt < self.max_attempts => delay,
                        _ => return Err(error),
                    };
                    tracing::info!(attempt, delay_ms = delay.as_millis() as u64, error = %error, "retrying");
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolError;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_retries_until_success() {
        let calls = AtomicU32::new(0);
        let result = RetryPolicy::new(3)
            .run(|| async {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(ToolError::retryable("get records", Some("users"), "connection reset"))
                } else {
                    Ok(42)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = RetryPolicy::new(2)
            .run(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(ToolError::retryable("list table names", None, "timeout"))
            })
            .await;

        assert!(result.unwrap_err().is_retryable());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalid_input_is_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<f64> = RetryPolicy::default()
            .run(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                crate::arithmetic::calculate_mean(&[])
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
