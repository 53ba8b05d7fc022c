//! Mock remote service and progress recorder for testing
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use rapid_upload::error::{Error, Result};
use rapid_upload::remote::RemoteService;
use rapid_upload::submit::{BatchTally, ProgressCallback, SubmissionOutcome};
use rapid_upload::types::{FileDescriptor, LoginStatus, PreCreateRequest, PreCreateResponse};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted reply to one pre-create call
#[derive(Debug, Clone)]
pub enum Reply {
    /// Service answers with this errno / `return_type`
    Response(PreCreateResponse),
    /// Transport failure
    Transport(String),
}

impl Reply {
    /// File exists server-side
    pub const fn exists() -> Self {
        Self::Response(PreCreateResponse {
            errno: 0,
            return_type: 2,
        })
    }

    /// File not found server-side (hash did not rapid-match)
    pub const fn not_found() -> Self {
        Self::Response(PreCreateResponse {
            errno: 0,
            return_type: 1,
        })
    }

    /// Non-zero errno
    pub const fn errno(code: i64) -> Self {
        Self::Response(PreCreateResponse {
            errno: code,
            return_type: 0,
        })
    }
}

/// Simple mock remote service
///
/// Features:
/// - Per-path reply queues; the last reply repeats once a queue drains
/// - Default reply for paths without a script
/// - Call tracking for verification
pub struct MockRemoteService {
    login_status: Mutex<LoginStatus>,
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    default_reply: Mutex<Reply>,
    pre_create_calls: Mutex<Vec<PreCreateRequest>>,
    login_calls: Mutex<usize>,
}

impl MockRemoteService {
    /// Logged-in service where every file already exists
    pub fn new() -> Self {
        Self {
            login_status: Mutex::new(LoginStatus::default()),
            replies: Mutex::new(HashMap::new()),
            default_reply: Mutex::new(Reply::exists()),
            pre_create_calls: Mutex::new(Vec::new()),
            login_calls: Mutex::new(0),
        }
    }

    /// Set the login status response
    pub fn set_login_status(&self, errno: i64, show_msg: &str) {
        *self.login_status.lock().unwrap() = LoginStatus {
            errno,
            show_msg: show_msg.to_string(),
            login_info: None,
        };
    }

    /// Script replies for a remote path (e.g. `/dir/a.txt`)
    pub fn script(&self, remote_path: &str, replies: Vec<Reply>) {
        self.replies
            .lock()
            .unwrap()
            .insert(remote_path.to_string(), replies.into());
    }

    /// Reply for paths without a script
    pub fn set_default_reply(&self, reply: Reply) {
        *self.default_reply.lock().unwrap() = reply;
    }

    /// All pre-create calls in order
    pub fn pre_create_calls(&self) -> Vec<PreCreateRequest> {
        self.pre_create_calls.lock().unwrap().clone()
    }

    /// Pre-create calls for one remote path
    pub fn calls_for(&self, remote_path: &str) -> Vec<PreCreateRequest> {
        self.pre_create_calls()
            .into_iter()
            .filter(|c| c.path == remote_path)
            .collect()
    }

    /// Number of login checks made
    pub fn login_calls(&self) -> usize {
        *self.login_calls.lock().unwrap()
    }

    fn next_reply(&self, remote_path: &str) -> Reply {
        let mut replies = self.replies.lock().unwrap();
        match replies.get_mut(remote_path) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if queue.len() == 1 => queue[0].clone(),
            _ => self.default_reply.lock().unwrap().clone(),
        }
    }
}

#[async_trait]
impl RemoteService for MockRemoteService {
    async fn check_login_status(&self) -> Result<LoginStatus> {
        *self.login_calls.lock().unwrap() += 1;
        Ok(self.login_status.lock().unwrap().clone())
    }

    async fn pre_create(&self, request: &PreCreateRequest) -> Result<PreCreateResponse> {
        self.pre_create_calls.lock().unwrap().push(request.clone());

        match self.next_reply(&request.path) {
            Reply::Response(response) => Ok(response),
            Reply::Transport(msg) => Err(Error::Io(std::io::Error::other(msg))),
        }
    }
}

/// Progress event, recorded in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BatchStart(usize),
    ItemStart { index: usize, total: usize, path: String },
    Retry { path: String, retry: u32, delay: Duration },
    ItemDone { index: usize, path: String, success: bool },
    BatchComplete { success: usize, failure: usize },
}

/// Progress callback that records every event
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<Event>>,
}

impl RecordingProgress {
    /// All events so far
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Retry events only
    pub fn retries(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, Event::Retry { .. }))
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_batch_start(&self, total: usize) {
        self.push(Event::BatchStart(total));
    }

    async fn on_item_start(&self, index: usize, total: usize, file: &FileDescriptor) {
        self.push(Event::ItemStart {
            index,
            total,
            path: file.path.clone(),
        });
    }

    async fn on_retry(&self, file: &FileDescriptor, retry: u32, delay: Duration) {
        self.push(Event::Retry {
            path: file.path.clone(),
            retry,
            delay,
        });
    }

    async fn on_item_done(&self, index: usize, file: &FileDescriptor, outcome: &SubmissionOutcome) {
        self.push(Event::ItemDone {
            index,
            path: file.path.clone(),
            success: outcome.is_success(),
        });
    }

    async fn on_batch_complete(&self, tally: &BatchTally) {
        self.push(Event::BatchComplete {
            success: tally.success_count,
            failure: tally.failure_count,
        });
    }
}
