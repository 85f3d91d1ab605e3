//! Resource adapter layer
//!
//! This module holds everything a resource needs to translate between its
//! declared state and remote API calls:
//! - [`Schema`] - declarative attribute definitions
//! - [`ResourceData`] - the state bag handed to every operation
//! - [`Diagnostics`] - user-facing problem reports
//! - [`Resource`] - the lifecycle trait resources implement
//!
//! Operations receive a [`ProviderConfiguration`], the read-only handle to
//! the API client shared by every resource instance.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::SensitiveDataScannerApi;

pub mod data;
pub mod diag;
pub mod schema;
pub mod sds_group;

pub use data::ResourceData;
pub use diag::{Diagnostic, Diagnostics, translate_client_error};
pub use schema::{Attribute, AttributeType, Schema};
pub use sds_group::SensitiveDataScannerGroupResource;

/// Outcome of a resource operation
pub type DiagResult<T = ()> = std::result::Result<T, Diagnostics>;

/// Provider-wide configuration shared by all resource operations
#[derive(Clone)]
pub struct ProviderConfiguration {
    api: Arc<dyn SensitiveDataScannerApi>,
}

impl ProviderConfiguration {
    pub fn new(api: Arc<dyn SensitiveDataScannerApi>) -> Self {
        Self { api }
    }

    /// Authenticated API client
    pub fn api(&self) -> &dyn SensitiveDataScannerApi {
        self.api.as_ref()
    }
}

/// Lifecycle operations of a managed resource.
///
/// The caller owns the [`ResourceData`] and persists it after each call.
/// An operation that fails must leave the data as it found it, except where
/// documented.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Resource type name, e.g. `datadog_sensitive_data_scanner_group`
    fn type_name(&self) -> &'static str;

    /// Declared attributes of the resource
    fn schema(&self) -> Schema;

    /// Create the remote object and store its id.
    async fn create(&self, d: &mut ResourceData, meta: &ProviderConfiguration) -> DiagResult;

    /// Refresh state from the remote object.
    ///
    /// Clears the id when the remote object no longer exists.
    async fn read(&self, d: &mut ResourceData, meta: &ProviderConfiguration) -> DiagResult;

    /// Push the complete desired state to the remote object.
    async fn update(&self, d: &mut ResourceData, meta: &ProviderConfiguration) -> DiagResult;

    /// Destroy the remote object. Clears the id on success.
    async fn delete(&self, d: &mut ResourceData, meta: &ProviderConfiguration) -> DiagResult;

    /// Adopt an existing remote object by id.
    ///
    /// The id is taken as-is, then [`read`](Resource::read) fills in the state.
    async fn import(&self, id: &str, meta: &ProviderConfiguration) -> DiagResult<ResourceData> {
        let mut d = ResourceData::new();
        d.set_id(id);
        self.read(&mut d, meta).await?;

        if d.id().is_empty() {
            return Err(Diagnostic::error("Cannot import non-existent remote object")
                .with_detail(format!(
                    "No {} with id \"{}\" exists remotely.",
                    self.type_name(),
                    id
                ))
                .into());
        }
        Ok(d)
    }
}
