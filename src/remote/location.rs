//! Target directory and host detection from disk web-UI URLs

use crate::error::{Error, Result};
use crate::types::ServiceConfig;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Web hosts serving the disk UI and API
pub const SUPPORTED_HOSTS: &[&str] = &["pan.baidu.com", "yun.baidu.com", "wangpan.baidu.com"];

/// Application id the web client identifies itself with
pub const DEFAULT_APP_ID: u32 = 250_528;

/// A directory on the disk, as addressed by the web UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskLocation {
    /// Web host, e.g. `pan.baidu.com`
    pub host: String,
    /// Decoded directory path; empty means the root
    pub path: String,
}

impl DiskLocation {
    /// URL that opens this directory in the web UI
    pub fn web_url(&self) -> String {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        format!(
            "https://{}/disk/main#/index?category=all&path={}",
            self.host,
            urlencoding::encode(path)
        )
    }
}

fn is_supported_host(host: &str) -> bool {
    SUPPORTED_HOSTS.contains(&host)
}

fn path_param_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[?&]path=([^&]+)").expect("hardcoded path pattern is valid"))
}

/// Extract host and target directory from a web-UI URL
///
/// The directory comes from the `path=` parameter, which the UI keeps in the
/// fragment (`#/index?category=all&path=%2Fdocs`). A URL without it points at
/// the root.
pub fn parse_disk_url(url: &str) -> Result<DiskLocation> {
    let parsed = Url::parse(url)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| Error::Parse(format!("URL has no host: {url}")))?;

    if !is_supported_host(host) {
        return Err(Error::UnsupportedHost(host.to_string()));
    }

    let path = match path_param_regex().captures(url) {
        Some(caps) => urlencoding::decode(&caps[1])
            .map_err(|e| Error::Parse(format!("invalid path encoding in {url}: {e}")))?
            .into_owned(),
        None => String::new(),
    };

    Ok(DiskLocation {
        host: host.to_string(),
        path,
    })
}

/// Service configuration for one of the [`SUPPORTED_HOSTS`]
pub fn service_config_for_host(host: &str) -> Result<ServiceConfig> {
    if !is_supported_host(host) {
        return Err(Error::UnsupportedHost(host.to_string()));
    }

    Ok(ServiceConfig {
        base_url: Url::parse(&format!("https://{host}"))?,
        app_id: DEFAULT_APP_ID,
    })
}
