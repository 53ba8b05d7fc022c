//! Session authentication for the disk web API
//!
//! The web API authenticates by browser cookie. Supports environment
//! variables and a cookie file in the user config directory.

mod cookie;

pub use cookie::{
    BDUSS_ENV, COOKIE_ENV, SessionAuth, cookie_file_path, get_session_auth,
    get_session_auth_from,
};

/// Source of the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Cookie from environment variable
    EnvVar,
    /// Cookie from file in the config directory
    CookieFile,
}
