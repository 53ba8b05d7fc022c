//! Disk service client
//!
//! The submission engine only talks to [`RemoteService`]; [`PanService`] is
//! the HTTP implementation and tests substitute their own.

mod errno;
mod factory;
mod location;
mod pan;

pub use errno::errno_message;
pub use factory::{BASE_URL_ENV, create_remote_service, resolve_service_config};
pub use location::{
    DEFAULT_APP_ID, DiskLocation, SUPPORTED_HOSTS, parse_disk_url, service_config_for_host,
};
pub use pan::PanService;

use crate::error::Result;
use crate::types::{LoginStatus, PreCreateRequest, PreCreateResponse};
use async_trait::async_trait;

/// Remote operations needed for rapid upload
///
/// Implementations return the raw service responses; interpreting errno and
/// `return_type` is left to the caller.
#[async_trait]
pub trait RemoteService: Send + Sync {
    /// Query whether the current session is logged in
    async fn check_login_status(&self) -> Result<LoginStatus>;

    /// Ask the service to create a file from its hashes
    async fn pre_create(&self, request: &PreCreateRequest) -> Result<PreCreateResponse>;
}
