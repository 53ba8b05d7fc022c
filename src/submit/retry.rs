//! Single-file submission with bounded, randomized retry

use crate::error::{Error, Result};
use crate::remote::RemoteService;
use crate::submit::ProgressCallback;
use crate::submit::casing::mutate_casing;
use crate::types::{FileDescriptor, PreCreateRequest, PreCreateResponse};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, warn};

/// Retries allowed after the first attempt
pub const MAX_RETRIES: u32 = 3;

/// Shortest pause before a retry
pub const MIN_RETRY_DELAY: Duration = Duration::from_millis(300);

/// Longest pause before a retry
pub const MAX_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// How hard to retry a hash mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; total calls are `max_retries + 1`
    pub max_retries: u32,
    /// Lower bound of the random delay (inclusive)
    pub min_delay: Duration,
    /// Upper bound of the random delay (inclusive)
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            min_delay: MIN_RETRY_DELAY,
            max_delay: MAX_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Upper bound on pre-create calls for one file
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Pick a delay uniformly from `min_delay..=max_delay`, in whole milliseconds
    pub fn backoff<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let min = u64::try_from(self.min_delay.as_millis()).unwrap_or(u64::MAX);
        let max = u64::try_from(self.max_delay.as_millis()).unwrap_or(u64::MAX);
        if max <= min {
            return Duration::from_millis(min);
        }
        Duration::from_millis(rng.random_range(min..=max))
    }
}

/// Submit one file, re-casing its content hash on mismatch
///
/// Only [`Error::HashMismatch`] is retried. When the budget runs out the last
/// mismatch is wrapped in [`Error::RetriesExhausted`]; every other error is
/// returned as is. Returns the number of pre-create calls made.
pub async fn submit_with_retry<R: Rng + Send + ?Sized>(
    service: &dyn RemoteService,
    target_dir: &str,
    file: &FileDescriptor,
    policy: &RetryPolicy,
    rng: &mut R,
    progress: &dyn ProgressCallback,
) -> Result<u32> {
    let mut attempt = 0;

    loop {
        let content_md5 = mutate_casing(&file.content_md5, attempt, rng);
        debug!("Attempt {} for {} with {content_md5}", attempt + 1, file.path);

        let request = PreCreateRequest::new(target_dir, file, content_md5);
        let outcome = service
            .pre_create(&request)
            .await
            .and_then(PreCreateResponse::into_result);

        match outcome {
            Ok(()) => return Ok(attempt + 1),
            Err(e) if e.is_hash_mismatch() && attempt < policy.max_retries => {
                let delay = policy.backoff(rng);
                attempt += 1;
                warn!(
                    "Hash mismatch for {}, retry {attempt}/{} in {}ms",
                    file.path,
                    policy.max_retries,
                    delay.as_millis()
                );
                progress.on_retry(file, attempt, delay).await;
                tokio::time::sleep(delay).await;
            }
            Err(e) if e.is_hash_mismatch() => {
                return Err(Error::RetriesExhausted {
                    attempts: attempt + 1,
                    source: Box::new(e),
                });
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_policy_allows_four_attempts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.max_attempts(), 4);
    }

    #[test]
    fn test_backoff_within_bounds() {
        let policy = RetryPolicy::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let delay = policy.backoff(&mut rng);
            assert!(delay >= MIN_RETRY_DELAY && delay <= MAX_RETRY_DELAY, "{delay:?}");
        }
    }

    #[test]
    fn test_backoff_degenerate_range() {
        let policy = RetryPolicy {
            max_retries: 1,
            min_delay: Duration::from_millis(500),
            max_delay: Duration::from_millis(100),
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(policy.backoff(&mut rng), Duration::from_millis(500));
    }
}
