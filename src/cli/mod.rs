//! CLI commands
//!
//! Command implementations for the `rapidup` binary.

mod auth;
mod input;
mod progress;
mod style;
mod upload;

pub use auth::{run_auth_setup, run_auth_test};
pub use upload::{UploadOptions, run_upload};
