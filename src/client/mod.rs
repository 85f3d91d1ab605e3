//! Datadog Sensitive Data Scanner API client

use async_trait::async_trait;

use crate::error::{ApiError, Result};

pub mod datadog;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use datadog::DatadogClient;
#[cfg(test)]
pub use mock::MockSensitiveDataScannerClient;

use models::{
    CheckUnparsed, SensitiveDataScannerCreateGroupResponse, SensitiveDataScannerGetConfigResponse,
    SensitiveDataScannerGroupCreateRequest, SensitiveDataScannerGroupDeleteRequest,
    SensitiveDataScannerGroupDeleteResponse, SensitiveDataScannerGroupUpdateRequest,
    SensitiveDataScannerGroupUpdateResponse,
};

/// Sensitive Data Scanner operations used by the group resource.
///
/// Errors carry the HTTP status they were mapped from (see
/// [`ApiError::status`]) so callers can tell "already gone" apart from real
/// failures.
#[async_trait]
pub trait SensitiveDataScannerApi: Send + Sync {
    /// List the scanner configuration with all of its groups and rules.
    ///
    /// There is no endpoint to fetch a single group.
    async fn list_scanning_groups(&self) -> Result<SensitiveDataScannerGetConfigResponse>;

    /// Create a scanning group.
    async fn create_scanning_group(
        &self,
        body: SensitiveDataScannerGroupCreateRequest,
    ) -> Result<SensitiveDataScannerCreateGroupResponse>;

    /// Replace the attributes of an existing group.
    async fn update_scanning_group(
        &self,
        group_id: &str,
        body: SensitiveDataScannerGroupUpdateRequest,
    ) -> Result<SensitiveDataScannerGroupUpdateResponse>;

    /// Delete a group, optionally guarded by the expected configuration version.
    async fn delete_scanning_group(
        &self,
        group_id: &str,
        body: SensitiveDataScannerGroupDeleteRequest,
    ) -> Result<SensitiveDataScannerGroupDeleteResponse>;
}

/// Reject responses holding enum values this client could not parse.
pub fn check_for_unparsed<T: CheckUnparsed>(resp: &T) -> Result<()> {
    match resp.unparsed() {
        Some(detail) => Err(ApiError::InvalidResponse(format!(
            "object contains unparsed element: {}",
            detail
        ))
        .into()),
        None => Ok(()),
    }
}
