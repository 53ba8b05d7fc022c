//! rapid-upload - batch rapid upload for Baidu Netdisk
//!
//! Parses rapid upload links (`content_md5#slice_md5#size#path`) and asks the
//! disk service to materialize each file from its hashes alone, without
//! transferring any file content.
//!
//! The library is interface-agnostic: the CLI binary is one consumer, and
//! anything implementing [`submit::ProgressCallback`] can drive a batch.

pub mod auth;
pub mod error;
pub mod links;
pub mod remote;
pub mod submit;
pub mod types;

pub use error::{Error, Result};
pub use links::{parse_links, require_links};
pub use types::FileDescriptor;
