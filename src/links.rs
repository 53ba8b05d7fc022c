//! Rapid upload link parsing
//!
//! One link per line: `content_md5#slice_md5#size#path`. Both hashes are 32
//! hex characters in any case, size is 1-20 decimal digits, and everything
//! after the third `#` is the path verbatim (it may contain more `#`).

use crate::error::{Error, Result};
use crate::types::FileDescriptor;
use regex::Regex;
use std::sync::OnceLock;

fn link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^([a-f0-9]{32})#([a-f0-9]{32})#([0-9]{1,20})#([^\r\n]+)")
            .expect("hardcoded link pattern is valid")
    })
}

/// Whitespace or a byte-order mark left by some editors
fn is_padding(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Parse a single trimmed line into a descriptor
///
/// The path ends at the first carriage return.
fn parse_line(line: &str) -> Option<FileDescriptor> {
    let caps = link_regex().captures(line.trim_matches(is_padding))?;

    Some(FileDescriptor {
        path: caps[4].to_string(),
        size: caps[3].to_string(),
        block_list: vec![String::new()],
        content_md5: caps[1].to_string(),
        slice_md5: caps[2].to_string(),
    })
}

/// Extract every valid link from free-form text
///
/// Lines that don't match are skipped silently. Handles both `\n` and
/// `\r\n` line endings.
pub fn parse_links(text: &str) -> Vec<FileDescriptor> {
    text.lines().filter_map(parse_line).collect()
}

/// Like [`parse_links`], but an empty result is an error
pub fn require_links(text: &str) -> Result<Vec<FileDescriptor>> {
    let links = parse_links(text);
    if links.is_empty() {
        return Err(Error::NoValidLinks);
    }
    Ok(links)
}
