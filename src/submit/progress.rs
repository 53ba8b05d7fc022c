//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, GUI, web server) to receive
//! progress updates while a batch is submitted.

use crate::submit::{BatchTally, SubmissionOutcome};
use crate::types::FileDescriptor;
use async_trait::async_trait;
use std::time::Duration;

/// Progress callback trait
///
/// Calls arrive strictly in submission order; `index` is 1-based.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called once before the first item
    async fn on_batch_start(&self, total: usize);

    /// Called before an item is submitted
    async fn on_item_start(&self, index: usize, total: usize, file: &FileDescriptor);

    /// Called before sleeping ahead of retry number `retry`
    async fn on_retry(&self, file: &FileDescriptor, retry: u32, delay: Duration);

    /// Called when an item's attempt sequence has finished
    async fn on_item_done(&self, index: usize, file: &FileDescriptor, outcome: &SubmissionOutcome);

    /// Called once after the last item, with the final counts
    async fn on_batch_complete(&self, tally: &BatchTally);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_batch_start(&self, _total: usize) {}
    async fn on_item_start(&self, _index: usize, _total: usize, _file: &FileDescriptor) {}
    async fn on_retry(&self, _file: &FileDescriptor, _retry: u32, _delay: Duration) {}
    async fn on_item_done(
        &self,
        _index: usize,
        _file: &FileDescriptor,
        _outcome: &SubmissionOutcome,
    ) {
    }
    async fn on_batch_complete(&self, _tally: &BatchTally) {}
}
