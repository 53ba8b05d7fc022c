//! Batch submission engine
//!
//! Submits parsed links one at a time:
//! 1. Casing - choose the content hash casing for each attempt
//! 2. Retry - submit one file, retrying hash mismatches with random backoff
//! 3. Batch - walk all files in order and tally the outcomes

mod batch;
mod casing;
mod progress;
mod retry;

pub use batch::{BatchTally, FailedItem, SubmissionOutcome, check_login, run_batch};
pub use casing::mutate_casing;
pub use progress::{NoopProgress, ProgressCallback};
pub use retry::{
    MAX_RETRIES, MAX_RETRY_DELAY, MIN_RETRY_DELAY, RetryPolicy, submit_with_retry,
};
