//! Human-readable descriptions of service errno values

/// Describe an errno returned by the disk web API
pub const fn errno_message(errno: i64) -> &'static str {
    match errno {
        0 => "request succeeded",
        2 | 31023 => "invalid parameters",
        111 => "access token expired",
        -6 => "authentication failed",
        6 => "user data access not permitted",
        31034 => "rate limited by the service",
        2131 => "share does not exist",
        10 => "file already exists",
        -3 | -31066 => "file does not exist",
        11 => "cannot save your own share",
        255 => "too many files in one transfer",
        12 => "batch transfer failed",
        -1 => "membership benefits expired",
        -7 => "invalid file or directory name, or access denied",
        -10 => "insufficient storage quota",
        404 => "rapid upload md5 mismatch",
        406 => "rapid upload failed to create file",
        407 => "fileModify returned no request id",
        _ => "unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(errno_message(-10), "insufficient storage quota");
        assert_eq!(errno_message(31023), errno_message(2));
        assert_eq!(errno_message(-31066), "file does not exist");
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(errno_message(123_456), "unknown error");
    }
}
