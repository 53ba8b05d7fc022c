//! Sequential batch submission and the login precondition

use crate::error::{Error, Result};
use crate::remote::{RemoteService, errno_message};
use crate::submit::retry::{RetryPolicy, submit_with_retry};
use crate::submit::ProgressCallback;
use crate::types::{FileDescriptor, LoginInfo};
use rand::Rng;
use tracing::{error, info};

/// Result of one file's attempt sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// File was materialized server-side
    Success {
        /// Pre-create calls it took
        attempts: u32,
    },
    /// File could not be materialized
    Failure {
        /// Errno from the service, if the failure came from it
        code: Option<i64>,
        /// Human-readable reason
        reason: String,
    },
}

impl SubmissionOutcome {
    fn from_error(err: &Error) -> Self {
        Self::Failure {
            code: err.errno(),
            reason: err.to_string(),
        }
    }

    /// Whether this is a success
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// A file that failed, kept for the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    /// Path as supplied in the link
    pub path: String,
    /// Errno from the service, if any
    pub code: Option<i64>,
    /// Human-readable reason
    pub reason: String,
}

/// Success and failure counts for one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchTally {
    /// Files materialized
    pub success_count: usize,
    /// Files that failed
    pub failure_count: usize,
    /// Details of each failure, in submission order
    pub failures: Vec<FailedItem>,
}

impl BatchTally {
    /// Number of files processed
    pub const fn total(&self) -> usize {
        self.success_count + self.failure_count
    }

    /// Whether every file succeeded
    pub const fn all_succeeded(&self) -> bool {
        self.failure_count == 0
    }
}

/// Verify the session is logged in
///
/// Meant to run once before any batch is offered to the user.
pub async fn check_login(service: &dyn RemoteService) -> Result<LoginInfo> {
    let status = service.check_login_status().await?;

    if status.errno == 0 {
        return Ok(status.login_info.unwrap_or_default());
    }

    let message = if status.show_msg.is_empty() {
        errno_message(status.errno).to_string()
    } else {
        status.show_msg
    };

    Err(Error::NotLoggedIn {
        code: status.errno,
        message,
    })
}

/// Submit every file in order, one at a time
///
/// A failed file is logged, counted, and skipped; it never stops the batch.
pub async fn run_batch<R: Rng + Send + ?Sized>(
    service: &dyn RemoteService,
    target_dir: &str,
    files: &[FileDescriptor],
    policy: &RetryPolicy,
    rng: &mut R,
    progress: &dyn ProgressCallback,
) -> BatchTally {
    let total = files.len();
    let mut tally = BatchTally::default();

    info!("Submitting {total} files to {target_dir:?}");
    progress.on_batch_start(total).await;

    for (i, file) in files.iter().enumerate() {
        let index = i + 1;
        progress.on_item_start(index, total, file).await;

        let outcome = match submit_with_retry(service, target_dir, file, policy, rng, progress).await
        {
            Ok(attempts) => {
                tally.success_count += 1;
                SubmissionOutcome::Success { attempts }
            }
            Err(e) => {
                error!("Failed to submit {}: {e}", file.path);
                tally.failure_count += 1;
                let outcome = SubmissionOutcome::from_error(&e);
                tally.failures.push(FailedItem {
                    path: file.path.clone(),
                    code: e.errno(),
                    reason: e.to_string(),
                });
                outcome
            }
        };

        progress.on_item_done(index, file, &outcome).await;
    }

    info!(
        "Batch complete: {} succeeded, {} failed",
        tally.success_count, tally.failure_count
    );
    progress.on_batch_complete(&tally).await;

    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_totals() {
        let tally = BatchTally {
            success_count: 2,
            failure_count: 1,
            failures: vec![],
        };
        assert_eq!(tally.total(), 3);
        assert!(!tally.all_succeeded());
        assert!(BatchTally::default().all_succeeded());
    }

    #[test]
    fn test_outcome_from_error() {
        let outcome = SubmissionOutcome::from_error(&Error::from_errno(-10));
        assert!(!outcome.is_success());
        assert_eq!(
            outcome,
            SubmissionOutcome::Failure {
                code: Some(-10),
                reason: "insufficient storage quota (errno -10)".to_string(),
            }
        );
    }
}
