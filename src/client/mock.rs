//! Mock Sensitive Data Scanner client for testing
//!
//! Keeps an in-memory scanner configuration so resource tests can run full
//! create/read/update/delete cycles without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::SensitiveDataScannerApi;
use super::models::{
    SensitiveDataScannerConfiguration, SensitiveDataScannerCreateGroupResponse,
    SensitiveDataScannerGetConfigIncludedItem, SensitiveDataScannerGetConfigResponse,
    SensitiveDataScannerGroupAttributes, SensitiveDataScannerGroupCreateRequest,
    SensitiveDataScannerGroupDeleteRequest, SensitiveDataScannerGroupDeleteResponse,
    SensitiveDataScannerGroupResponse, SensitiveDataScannerGroupType,
    SensitiveDataScannerGroupUpdateRequest, SensitiveDataScannerGroupUpdateResponse,
    SensitiveDataScannerMeta, SensitiveDataScannerMetaVersionOnly,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockSensitiveDataScannerClient::new()
///     .with_groups(vec![group("grp-1", "pii")])
///     .await;
///
/// let config = mock.list_scanning_groups().await?;
/// assert_eq!(config.groups().count(), 1);
/// ```
#[derive(Default)]
pub struct MockSensitiveDataScannerClient {
    /// Groups currently stored in the fake configuration
    groups: Arc<Mutex<Vec<SensitiveDataScannerGroupResponse>>>,
    /// Configuration version, bumped on every mutation
    version: Arc<Mutex<i64>>,
    /// When set, listing the configuration answers 404
    config_missing: Arc<Mutex<bool>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured request bodies for test assertions
    captured: Arc<Mutex<CapturedRequests>>,
    next_id: Arc<Mutex<usize>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_scanning_groups: usize,
    pub create_scanning_group: usize,
    pub update_scanning_group: usize,
    pub delete_scanning_group: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_scanning_groups
            + self.create_scanning_group
            + self.update_scanning_group
            + self.delete_scanning_group
    }
}

/// Request bodies the mock received, most recent last.
#[derive(Default, Debug, Clone)]
pub struct CapturedRequests {
    pub creates: Vec<SensitiveDataScannerGroupCreateRequest>,
    pub updates: Vec<(String, SensitiveDataScannerGroupUpdateRequest)>,
    pub deletes: Vec<(String, SensitiveDataScannerGroupDeleteRequest)>,
}

/// Build a stored group for seeding the mock.
pub fn group(id: &str, name: &str) -> SensitiveDataScannerGroupResponse {
    SensitiveDataScannerGroupResponse {
        id: id.to_string(),
        kind: SensitiveDataScannerGroupType::SensitiveDataScannerGroup,
        attributes: SensitiveDataScannerGroupAttributes {
            name: Some(name.to_string()),
            ..Default::default()
        },
        relationships: None,
    }
}

impl MockSensitiveDataScannerClient {
    /// Create a new mock client with an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the configuration with groups.
    pub async fn with_groups(self, groups: Vec<SensitiveDataScannerGroupResponse>) -> Self {
        *self.groups.lock().await = groups;
        self
    }

    /// Start from a given configuration version.
    pub async fn with_version(self, version: i64) -> Self {
        *self.version.lock().await = version;
        self
    }

    /// Make the configuration listing answer 404.
    pub async fn with_config_missing(self) -> Self {
        *self.config_missing.lock().await = true;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Remove a group behind the adapter's back.
    pub async fn remove_group(&self, id: &str) {
        self.groups.lock().await.retain(|g| g.id != id);
    }

    /// Snapshot of a stored group.
    pub async fn stored_group(&self, id: &str) -> Option<SensitiveDataScannerGroupResponse> {
        self.groups.lock().await.iter().find(|g| g.id == id).cloned()
    }

    /// Current configuration version.
    pub async fn version(&self) -> i64 {
        *self.version.lock().await
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured request bodies.
    pub async fn captured(&self) -> CapturedRequests {
        self.captured.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Reject a mutation whose expected version is stale.
    async fn check_version(&self, meta: &SensitiveDataScannerMetaVersionOnly) -> Result<()> {
        let current = *self.version.lock().await;
        match meta.version {
            Some(expected) if expected != current => Err(ApiError::Conflict(format!(
                "expected version {} but configuration is at {}",
                expected, current
            ))
            .into()),
            _ => Ok(()),
        }
    }

    async fn bump_version(&self) -> i64 {
        let mut version = self.version.lock().await;
        *version += 1;
        *version
    }
}

#[async_trait]
impl SensitiveDataScannerApi for MockSensitiveDataScannerClient {
    async fn list_scanning_groups(&self) -> Result<SensitiveDataScannerGetConfigResponse> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_scanning_groups += 1;
        drop(counts);

        if *self.config_missing.lock().await {
            return Err(ApiError::NotFound("configuration not found".to_string()).into());
        }

        let included = self
            .groups
            .lock()
            .await
            .iter()
            .cloned()
            .map(SensitiveDataScannerGetConfigIncludedItem::Group)
            .collect();

        Ok(SensitiveDataScannerGetConfigResponse {
            data: Some(SensitiveDataScannerConfiguration {
                id: "mock-config".to_string(),
                kind: Default::default(),
            }),
            included,
            meta: Some(SensitiveDataScannerMeta {
                version: Some(self.version().await),
                ..Default::default()
            }),
        })
    }

    async fn create_scanning_group(
        &self,
        body: SensitiveDataScannerGroupCreateRequest,
    ) -> Result<SensitiveDataScannerCreateGroupResponse> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.create_scanning_group += 1;
        drop(counts);

        self.captured.lock().await.creates.push(body.clone());

        let data = body
            .data
            .ok_or_else(|| ApiError::BadRequest {
                status: 400,
                message: "missing data".to_string(),
            })?;

        let id = {
            let mut next = self.next_id.lock().await;
            *next += 1;
            format!("mock-group-{}", *next)
        };

        let created = SensitiveDataScannerGroupResponse {
            id,
            kind: data.kind,
            attributes: data.attributes,
            relationships: data.relationships,
        };
        self.groups.lock().await.push(created.clone());
        let version = self.bump_version().await;

        Ok(SensitiveDataScannerCreateGroupResponse {
            data: Some(created),
            meta: Some(SensitiveDataScannerMetaVersionOnly {
                version: Some(version),
            }),
        })
    }

    async fn update_scanning_group(
        &self,
        group_id: &str,
        body: SensitiveDataScannerGroupUpdateRequest,
    ) -> Result<SensitiveDataScannerGroupUpdateResponse> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.update_scanning_group += 1;
        drop(counts);

        self.captured
            .lock()
            .await
            .updates
            .push((group_id.to_string(), body.clone()));
        self.check_version(&body.meta).await?;

        let mut groups = self.groups.lock().await;
        let group = groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or_else(|| ApiError::NotFound(format!("Group not found: {}", group_id)))?;

        // Full replacement: fields missing from the body fall back to defaults
        group.attributes = body.data.attributes;
        drop(groups);

        let version = self.bump_version().await;
        Ok(SensitiveDataScannerGroupUpdateResponse {
            meta: Some(SensitiveDataScannerMetaVersionOnly {
                version: Some(version),
            }),
        })
    }

    async fn delete_scanning_group(
        &self,
        group_id: &str,
        body: SensitiveDataScannerGroupDeleteRequest,
    ) -> Result<SensitiveDataScannerGroupDeleteResponse> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.delete_scanning_group += 1;
        drop(counts);

        self.captured
            .lock()
            .await
            .deletes
            .push((group_id.to_string(), body.clone()));
        self.check_version(&body.meta).await?;

        let mut groups = self.groups.lock().await;
        let initial_len = groups.len();
        groups.retain(|g| g.id != group_id);

        if groups.len() == initial_len {
            return Err(ApiError::NotFound(format!("Group not found: {}", group_id)).into());
        }
        drop(groups);

        let version = self.bump_version().await;
        Ok(SensitiveDataScannerGroupDeleteResponse {
            meta: Some(SensitiveDataScannerMetaVersionOnly {
                version: Some(version),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockSensitiveDataScannerClient::new();

        let config = mock.list_scanning_groups().await.unwrap();
        assert_eq!(config.groups().count(), 0);
        assert_eq!(mock.call_counts().await.total(), 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockSensitiveDataScannerClient::new()
            .with_error(ApiError::ServerError {
                status: 500,
                message: "boom".to_string(),
            })
            .await;

        assert!(mock.list_scanning_groups().await.is_err());
        assert!(mock.list_scanning_groups().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_delete_rejects_stale_version() {
        let mock = MockSensitiveDataScannerClient::new()
            .with_groups(vec![group("grp-1", "pii")])
            .await
            .with_version(5)
            .await;

        let body = SensitiveDataScannerGroupDeleteRequest {
            meta: SensitiveDataScannerMetaVersionOnly { version: Some(4) },
        };
        let err = mock.delete_scanning_group("grp-1", body).await.unwrap_err();

        assert_eq!(err.status(), Some(409));
        assert!(mock.stored_group("grp-1").await.is_some());
    }

    #[tokio::test]
    async fn test_mock_config_missing_answers_not_found() {
        let mock = MockSensitiveDataScannerClient::new()
            .with_config_missing()
            .await;

        let err = mock.list_scanning_groups().await.unwrap_err();
        assert!(err.is_not_found());
    }
}
