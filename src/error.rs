//! Error types for rapid-upload

use thiserror::Error;

/// Errno the disk service uses for "rapid upload md5 mismatch"
pub const HASH_MISMATCH_ERRNO: i64 = 404;

/// Errors that can occur while parsing links or talking to the disk service
#[derive(Error, Debug)]
pub enum Error {
    /// Input text contained no valid rapid upload link
    #[error("no valid rapid upload links found")]
    NoValidLinks,

    /// Session is not authenticated according to the login check
    #[error("not logged in: {message} (errno {code})")]
    NotLoggedIn {
        /// Errno returned by the login check
        code: i64,
        /// Message shown by the service
        message: String,
    },

    /// No usable credentials could be found
    #[error("authentication error: {0}")]
    Auth(String),

    /// The service did not match the supplied hashes to existing content
    #[error("rapid upload did not take effect (errno 404)")]
    HashMismatch,

    /// Any other non-zero errno from the service
    #[error("{message} (errno {code})")]
    Api {
        /// Errno returned by the service
        code: i64,
        /// Human-readable description
        message: String,
    },

    /// Retry budget was used up
    #[error("gave up after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Total number of pre-create calls made
        attempts: u32,
        /// Error from the final attempt
        #[source]
        source: Box<Error>,
    },

    /// Host is not a known disk web host
    #[error("unsupported host: {0}")]
    UnsupportedHost(String),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map a non-zero errno from the service to a typed error
    pub fn from_errno(code: i64) -> Self {
        if code == HASH_MISMATCH_ERRNO {
            Self::HashMismatch
        } else {
            Self::Api {
                code,
                message: crate::remote::errno_message(code).to_string(),
            }
        }
    }

    /// Whether the retry strategy may re-submit after this error
    pub const fn is_hash_mismatch(&self) -> bool {
        matches!(self, Self::HashMismatch)
    }

    /// Errno carried by this error, if it came from the service
    pub fn errno(&self) -> Option<i64> {
        match self {
            Self::HashMismatch => Some(HASH_MISMATCH_ERRNO),
            Self::Api { code, .. } | Self::NotLoggedIn { code, .. } => Some(*code),
            Self::RetriesExhausted { source, .. } => source.errno(),
            _ => None,
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
