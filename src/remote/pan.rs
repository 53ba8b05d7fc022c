//! Disk web API client using reqwest

use crate::error::Result;
use crate::remote::RemoteService;
use crate::types::{LoginStatus, PreCreateRequest, PreCreateResponse, ServiceConfig};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{COOKIE, USER_AGENT};
use tracing::debug;
use url::Url;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Browser-like user agent; the web API rejects unknown clients
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Disk service backed by the web API and a session cookie
pub struct PanService {
    client: Client,
    cookie: String,
    config: ServiceConfig,
}

impl PanService {
    /// Create a new service for the given session cookie
    pub fn new(cookie: String, config: ServiceConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            cookie,
            config,
        }
    }

    /// Service configuration in use
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Resolve `endpoint` below the base URL, keeping any path prefix
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        let mut base = self.config.base_url.clone();
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        Ok(base.join(endpoint)?)
    }
}

#[async_trait]
impl RemoteService for PanService {
    async fn check_login_status(&self) -> Result<LoginStatus> {
        let url = self.api_url("api/loginStatus")?;
        let app_id = self.config.app_id.to_string();

        let status: LoginStatus = self
            .client
            .get(url)
            .header(COOKIE, &self.cookie)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .query(&[
                ("clienttype", "0"),
                ("app_id", app_id.as_str()),
                ("web", "1"),
                ("channel", "chunlei"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Login status errno={}", status.errno);
        Ok(status)
    }

    async fn pre_create(&self, request: &PreCreateRequest) -> Result<PreCreateResponse> {
        let url = self.api_url("api/precreate")?;
        let app_id = self.config.app_id.to_string();
        let fields = request.form_fields()?;

        debug!(
            "Pre-create {} (size {}, content-md5 {})",
            request.path, request.size, request.content_md5
        );

        let response: PreCreateResponse = self
            .client
            .post(url)
            .header(COOKIE, &self.cookie)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .query(&[("app_id", app_id.as_str()), ("clienttype", "21")])
            .form(&fields)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(
            "Pre-create {} -> errno={} return_type={}",
            request.path, response.errno, response.return_type
        );
        Ok(response)
    }
}
