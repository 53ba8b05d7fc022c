//! Test data factories for rapid-upload types
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use rapid_upload::types::FileDescriptor;

/// Content hash used by most fixtures
pub const CONTENT_MD5: &str = "5eb63bbbe01eeed093cb22bb8f5acdc3";

/// Slice hash used by most fixtures
pub const SLICE_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

/// Create a descriptor with default hashes and size
pub fn make_file(path: &str) -> FileDescriptor {
    FileDescriptor {
        path: path.to_string(),
        size: "1024".to_string(),
        block_list: vec![String::new()],
        content_md5: CONTENT_MD5.to_string(),
        slice_md5: SLICE_MD5.to_string(),
    }
}

/// Create a descriptor whose content hash arrives upper-cased
pub fn make_file_upper(path: &str) -> FileDescriptor {
    FileDescriptor {
        content_md5: CONTENT_MD5.to_uppercase(),
        slice_md5: SLICE_MD5.to_uppercase(),
        ..make_file(path)
    }
}

/// Create descriptors for each path
pub fn make_files(paths: &[&str]) -> Vec<FileDescriptor> {
    paths.iter().map(|p| make_file(p)).collect()
}

/// Render a link line in the user-facing format
pub fn link_line(path: &str, size: u64) -> String {
    format!("{CONTENT_MD5}#{SLICE_MD5}#{size}#{path}")
}
