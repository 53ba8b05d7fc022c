//! Remote service factory
//!
//! Creates the HTTP service from the session cookie and host selection.

use crate::auth::get_session_auth;
use crate::error::Result;
use crate::remote::location::{DEFAULT_APP_ID, service_config_for_host};
use crate::remote::{PanService, RemoteService};
use crate::types::ServiceConfig;
use std::env;
use url::Url;

/// Environment variable overriding the API base URL (e.g. a local test server)
pub const BASE_URL_ENV: &str = "RAPID_UPLOAD_BASE_URL";

/// Service configuration for `host`, honoring [`BASE_URL_ENV`]
pub fn resolve_service_config(host: &str) -> Result<ServiceConfig> {
    if let Ok(base) = env::var(BASE_URL_ENV) {
        return Ok(ServiceConfig {
            base_url: Url::parse(base.trim())?,
            app_id: DEFAULT_APP_ID,
        });
    }
    service_config_for_host(host)
}

/// Create a remote service for `host`
///
/// Handles cookie discovery and client construction.
pub async fn create_remote_service(host: &str) -> Result<Box<dyn RemoteService>> {
    let config = resolve_service_config(host)?;
    let auth = get_session_auth().await?;
    Ok(Box::new(PanService::new(auth.cookie, config)))
}
