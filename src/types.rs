//! Core types for rapid-upload

use crate::error::{Error, Result};
use serde::Deserialize;
use url::Url;

/// One parsed rapid upload link
///
/// Identifies a file by its hashes and size. The service can materialize the
/// file under `path` when it already stores identical content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// File name or relative path, exactly as supplied
    pub path: String,
    /// Size in bytes as decimal text (up to 20 digits)
    pub size: String,
    /// Block hashes; always a single empty placeholder for this protocol
    pub block_list: Vec<String>,
    /// Whole-file MD5, 32 hex chars in any case
    pub content_md5: String,
    /// MD5 of the leading slice, 32 hex chars in any case
    pub slice_md5: String,
}

impl FileDescriptor {
    /// Size as a number, if it fits
    pub fn size_bytes(&self) -> Option<u128> {
        self.size.parse().ok()
    }

    /// Full remote path of this file inside `target_dir`
    pub fn remote_path(&self, target_dir: &str) -> String {
        format!("{}/{}", target_dir.trim_end_matches('/'), self.path)
    }
}

/// `return_type` meaning "file does not exist server-side"
pub const RETURN_TYPE_NOT_FOUND: i64 = 1;

/// `return_type` meaning "file exists server-side and was materialized"
pub const RETURN_TYPE_EXISTS: i64 = 2;

/// Conflict policy code sent with every pre-create
pub const RTYPE: u8 = 2;

/// Login info attached to an authenticated session
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginInfo {
    /// CSRF token for the web API
    #[serde(default)]
    pub bdstoken: String,
}

/// Response of the login status endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginStatus {
    /// Zero when the session is authenticated
    pub errno: i64,
    /// Message to show the user
    #[serde(default)]
    pub show_msg: String,
    /// Present when authenticated
    #[serde(default)]
    pub login_info: Option<LoginInfo>,
}

/// Response of the pre-create endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PreCreateResponse {
    /// Error code, zero on success
    pub errno: i64,
    /// 1 = not on server, 2 = exists on server
    #[serde(default)]
    pub return_type: i64,
}

impl PreCreateResponse {
    /// Interpret the response as a rapid upload outcome
    ///
    /// Only `errno == 0` with `return_type == 2` counts as success; any other
    /// successful response means the hashes did not rapid-match.
    pub fn into_result(self) -> Result<()> {
        match (self.errno, self.return_type) {
            (0, RETURN_TYPE_EXISTS) => Ok(()),
            (0, _) => Err(Error::HashMismatch),
            (code, _) => Err(Error::from_errno(code)),
        }
    }
}

/// Parameters of a single pre-create call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreCreateRequest {
    /// Absolute remote path of the file
    pub path: String,
    /// Size in bytes as decimal text
    pub size: String,
    /// Block hashes, lowercased
    pub block_list: Vec<String>,
    /// Content MD5 in the casing chosen for this attempt
    pub content_md5: String,
    /// Slice MD5, lowercased
    pub slice_md5: String,
}

impl PreCreateRequest {
    /// Build the request for `file` inside `target_dir`
    ///
    /// `content_md5` is passed through verbatim; callers choose its casing.
    pub fn new(target_dir: &str, file: &FileDescriptor, content_md5: String) -> Self {
        Self {
            path: file.remote_path(target_dir),
            size: file.size.clone(),
            block_list: file.block_list.iter().map(|b| b.to_lowercase()).collect(),
            content_md5,
            slice_md5: file.slice_md5.to_lowercase(),
        }
    }

    /// Form fields in the order the service expects them
    pub fn form_fields(&self) -> Result<Vec<(&'static str, String)>> {
        let block_list = serde_json::to_string(&self.block_list)
            .map_err(|e| Error::Internal(format!("Failed to serialize block list: {e}")))?;

        Ok(vec![
            ("path", self.path.clone()),
            ("size", self.size.clone()),
            ("isdir", "0".to_string()),
            ("block_list", block_list),
            ("autoinit", "1".to_string()),
            ("content-md5", self.content_md5.clone()),
            ("slice-md5", self.slice_md5.clone()),
            ("rtype", RTYPE.to_string()),
        ])
    }
}

/// Where and how to reach the disk service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Scheme and host of the web API, e.g. `https://pan.baidu.com`
    pub base_url: Url,
    /// Application id sent with every request
    pub app_id: u32,
}
