//! Session cookie discovery

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding a full `Cookie` header value
pub const COOKIE_ENV: &str = "RAPID_UPLOAD_COOKIE";

/// Environment variable holding just the `BDUSS` session token
pub const BDUSS_ENV: &str = "BDUSS";

/// Session authentication
#[derive(Debug, Clone)]
pub struct SessionAuth {
    /// Value for the `Cookie` request header
    pub cookie: String,
    /// Where the cookie was obtained from
    pub source: AuthSource,
}

/// Default cookie file: `<config dir>/rapid-upload/cookie`
pub fn cookie_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rapid-upload").join("cookie"))
}

/// A bare token becomes `BDUSS=<token>`; anything with `=` is used as is
fn normalize_cookie(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else if raw.contains('=') {
        Some(raw.to_string())
    } else {
        Some(format!("BDUSS={raw}"))
    }
}

/// Get session authentication
///
/// Priority:
/// 1. `RAPID_UPLOAD_COOKIE` environment variable
/// 2. `BDUSS` environment variable
/// 3. Cookie file (see [`cookie_file_path`])
pub async fn get_session_auth() -> Result<SessionAuth> {
    get_session_auth_from(cookie_file_path().as_deref()).await
}

/// Same as [`get_session_auth`] with an explicit cookie file location
pub async fn get_session_auth_from(cookie_file: Option<&Path>) -> Result<SessionAuth> {
    if let Some(cookie) = env::var(COOKIE_ENV).ok().as_deref().and_then(normalize_cookie) {
        return Ok(SessionAuth {
            cookie,
            source: AuthSource::EnvVar,
        });
    }

    if let Some(token) = env::var(BDUSS_ENV).ok().map(|t| t.trim().to_string()) {
        if !token.is_empty() {
            return Ok(SessionAuth {
                cookie: format!("BDUSS={token}"),
                source: AuthSource::EnvVar,
            });
        }
    }

    if let Some(path) = cookie_file {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => {
                if let Some(cookie) = normalize_cookie(&contents) {
                    return Ok(SessionAuth {
                        cookie,
                        source: AuthSource::CookieFile,
                    });
                }
                debug!("Cookie file {} is empty", path.display());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No cookie file at {}", path.display());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(Error::Auth(format!(
        "No session cookie found. Set {COOKIE_ENV} or {BDUSS_ENV}, or run `rapidup auth setup`"
    )))
}
