use model::execution::errors::{RetrievalError, SubmissionError};
use std::{future::Future, time::Duration};
use tokio::time::sleep;
use tracing::warn;

/// Errors that know whether another attempt could help.
pub trait Transience {
    fn is_transient(&self) -> bool;
}

impl Transience for RetrievalError {
    fn is_transient(&self) -> bool {
        RetrievalError::is_transient(self)
    }
}

impl Transience for SubmissionError {
    fn is_transient(&self) -> bool {
        SubmissionError::is_transient(self)
    }
}

/// Exponential-backoff retry for the two network calls of an iteration.
/// Only transient errors are retried; the last error is returned as-is.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Single attempt: failures surface immediately.
    pub fn once() -> Self {
        Self::with_attempts(1)
    }

    pub fn with_attempts(max_attempts: u32) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
        }
    }

    pub async fn run<F, Fut, T, E>(&self, operation: &str, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Transience + std::fmt::Display,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < self.max_attempts => {
                    let delay = self.backoff(attempt);
                    warn!(
                        operation,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient failure, retrying"
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u128 << (attempt - 1).min(6);
        let delay_ms = self.base_delay.as_millis().saturating_mul(factor);
        Duration::from_millis(delay_ms.min(self.max_delay.as_millis()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    struct FakeError {
        transient: bool,
    }

    impl std::fmt::Display for FakeError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "fake error (transient: {})", self.transient)
        }
    }

    impl Transience for FakeError {
        fn is_transient(&self) -> bool {
            self.transient
        }
    }

    fn immediate() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn retries_transient_errors_until_success() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, FakeError> = immediate()
            .run("op", || {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if n < 3 {
                        Err(FakeError { transient: true })
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn fatal_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), FakeError> = immediate()
            .run("op", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(FakeError { transient: false }) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhausted_attempts_return_the_last_error() {
        let calls = AtomicU32::new(0);
        let result: Result<(), FakeError> = immediate()
            .run("op", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(FakeError { transient: true }) }
            })
            .await;

        assert!(result.unwrap_err().is_transient());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn backoff_grows_and_is_capped() {
        let policy = RetryPolicy {
            max_attempts: 10,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(450),
        };

        assert_eq!(policy.backoff(1), Duration::from_millis(100));
        assert_eq!(policy.backoff(2), Duration::from_millis(200));
        assert_eq!(policy.backoff(3), Duration::from_millis(400));
        assert_eq!(policy.backoff(4), Duration::from_millis(450));
        assert_eq!(policy.backoff(9), Duration::from_millis(450));
    }
}
