//! CLI progress callback with a progress bar

use crate::cli::style::{CHECK, CROSS, Paint, RETRY, Tone, bar_style};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressDrawTarget};
use rapid_upload::submit::{BatchTally, ProgressCallback, SubmissionOutcome};
use rapid_upload::types::FileDescriptor;
use std::sync::Mutex;
use std::time::Duration;

/// Shows "Uploading i/n <path>" and prints per-file results above the bar
pub struct CliProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a progress display; the bar appears on batch start
    pub const fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|bar| bar.clone())
    }

    fn println(&self, line: &str) {
        // A hidden bar (stdout not a terminal) swallows println
        match self.bar() {
            Some(bar) if !bar.is_hidden() => bar.println(line),
            _ => anstream::println!("{line}"),
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_batch_start(&self, total: usize) {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stdout());
        bar.set_style(bar_style());
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    async fn on_item_start(&self, index: usize, _total: usize, file: &FileDescriptor) {
        if let Some(bar) = self.bar() {
            bar.set_position(index as u64);
            bar.set_message(file.path.clone());
        }
    }

    async fn on_retry(&self, file: &FileDescriptor, retry_no: u32, delay: Duration) {
        self.println(&format!(
            "  {} {} hash mismatch, retry {retry_no} in {}ms",
            RETRY.paint(Tone::Warn),
            file.path.paint(Tone::Accent),
            delay.as_millis()
        ));
    }

    async fn on_item_done(&self, _index: usize, file: &FileDescriptor, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success { .. } => {
                self.println(&format!("  {} {}", CHECK.paint(Tone::Success), file.path.paint(Tone::Emphasis)));
            }
            SubmissionOutcome::Failure { reason, .. } => {
                self.println(&format!(
                    "  {} {}: {}",
                    CROSS.paint(Tone::Error),
                    file.path.paint(Tone::Accent),
                    reason.paint(Tone::Error)
                ));
            }
        }
    }

    async fn on_batch_complete(&self, _tally: &BatchTally) {
        let bar = self.bar.lock().ok().and_then(|mut slot| slot.take());
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
    }
}
