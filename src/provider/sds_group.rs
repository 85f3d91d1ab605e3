//! `datadog_sensitive_data_scanner_group` resource
//!
//! Translates group resource data into Sensitive Data Scanner API calls.
//! Every optional attribute is copied into request bodies only when it is set
//! to a non-zero value; updates submit the complete attribute set, so an
//! attribute left out of the configuration reverts to the API default.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::{Value, json};

use super::{
    Attribute, AttributeType, DiagResult, Diagnostic, ProviderConfiguration, Resource,
    ResourceData, Schema, translate_client_error,
};
use crate::client::check_for_unparsed;
use crate::client::models::{
    SensitiveDataScannerFilter, SensitiveDataScannerGroupAttributes,
    SensitiveDataScannerGroupCreate, SensitiveDataScannerGroupCreateRequest,
    SensitiveDataScannerGroupDeleteRequest, SensitiveDataScannerGroupUpdate,
    SensitiveDataScannerGroupUpdateRequest, SensitiveDataScannerProduct,
};

pub const RESOURCE_TYPE: &str = "datadog_sensitive_data_scanner_group";

/// Sensitive Data Scanner group resource
#[derive(Debug, Clone, Copy, Default)]
pub struct SensitiveDataScannerGroupResource;

impl SensitiveDataScannerGroupResource {
    pub fn new() -> Self {
        Self
    }
}

/// Declared attributes of a scanning group
pub fn group_schema() -> Schema {
    Schema::new()
        .with_description(
            "Provides a Datadog SensitiveDataScannerGroup resource. This can be used to create \
             and manage Datadog sensitive_data_scanner_group.",
        )
        .with_attribute(
            "description",
            Attribute::optional_string("Description of the group."),
        )
        .with_attribute(
            "filter",
            Attribute::optional_block(
                Schema::new().with_attribute(
                    "query",
                    Attribute::optional_string("Query to filter the events."),
                ),
                Some(1),
                "Filter for the Scanning Group.",
            ),
        )
        .with_attribute(
            "is_enabled",
            Attribute::optional_bool("Whether or not the group is enabled."),
        )
        .with_attribute("name", Attribute::optional_string("Name of the group."))
        .with_attribute(
            "product_list",
            Attribute::optional_list(
                AttributeType::String,
                &format!(
                    "List of products the scanning group applies. Valid values are {}.",
                    SensitiveDataScannerProduct::ALLOWED
                        .iter()
                        .map(|p| format!("`{}`", p))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ),
        )
        .with_attribute(
            "version",
            Attribute::optional_int(
                "Expected configuration version, sent with delete requests to guard \
                 against concurrent changes.",
            ),
        )
}

/// Attribute set built from resource data, shared by create and update.
fn build_attributes(d: &ResourceData) -> SensitiveDataScannerGroupAttributes {
    let mut attributes = SensitiveDataScannerGroupAttributes::default();

    if let Some(description) = d.get_ok("description").and_then(Value::as_str) {
        attributes.description = Some(description.to_string());
    }

    let mut filter = SensitiveDataScannerFilter::default();
    if let Some(query) = d.get_ok("filter.0.query").and_then(Value::as_str) {
        filter.query = Some(query.to_string());
    }
    attributes.filter = Some(filter);

    if let Some(is_enabled) = d.get_ok("is_enabled").and_then(Value::as_bool) {
        attributes.is_enabled = Some(is_enabled);
    }

    if let Some(name) = d.get_ok("name").and_then(Value::as_str) {
        attributes.name = Some(name.to_string());
    }

    let product_list: Vec<SensitiveDataScannerProduct> = d
        .get("product_list")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_product).collect())
        .unwrap_or_default();
    attributes.product_list = Some(product_list);

    attributes
}

/// Unknown product tokens are skipped rather than failing the request.
fn parse_product(item: &Value) -> Option<SensitiveDataScannerProduct> {
    let token = item.as_str()?;
    match token.parse() {
        Ok(product) => Some(product),
        Err(err) => {
            debug!("Ignoring product_list entry: {}", err);
            None
        }
    }
}

/// Body of a create call
pub fn build_create_request(d: &ResourceData) -> SensitiveDataScannerGroupCreateRequest {
    SensitiveDataScannerGroupCreateRequest {
        data: Some(SensitiveDataScannerGroupCreate {
            attributes: build_attributes(d),
            ..Default::default()
        }),
        meta: None,
    }
}

/// Body of an update call; a full replacement of the group's attributes
pub fn build_update_request(d: &ResourceData) -> SensitiveDataScannerGroupUpdateRequest {
    SensitiveDataScannerGroupUpdateRequest {
        data: SensitiveDataScannerGroupUpdate {
            id: Some(d.id().to_string()).filter(|id| !id.is_empty()),
            attributes: build_attributes(d),
            ..Default::default()
        },
        meta: Default::default(),
    }
}

/// Body of a delete call, carrying the expected version when one is set
pub fn build_delete_request(d: &ResourceData) -> SensitiveDataScannerGroupDeleteRequest {
    let mut body = SensitiveDataScannerGroupDeleteRequest::default();
    if let Some(version) = d.get_ok("version").and_then(parse_version) {
        body.meta.version = Some(version);
    }
    body
}

fn parse_version(value: &Value) -> Option<i64> {
    let version = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    if version.is_none() {
        debug!("Ignoring unparsable version {}", value);
    }
    version
}

/// Mirror remote attributes into state; unset remote fields are removed.
fn update_state(d: &mut ResourceData, attributes: &SensitiveDataScannerGroupAttributes) {
    set_or_remove(d, "description", attributes.description.clone().map(Value::String));
    set_or_remove(
        d,
        "filter",
        attributes
            .filter
            .as_ref()
            .and_then(|f| f.query.as_ref())
            .map(|query| json!([{ "query": query }])),
    );
    set_or_remove(d, "is_enabled", attributes.is_enabled.map(Value::Bool));
    set_or_remove(d, "name", attributes.name.clone().map(Value::String));
    set_or_remove(
        d,
        "product_list",
        attributes
            .product_list
            .as_ref()
            .filter(|products| !products.is_empty())
            .map(|products| {
                products
                    .iter()
                    .map(|p| Value::String(p.as_str().to_string()))
                    .collect()
            }),
    );
}

fn set_or_remove(d: &mut ResourceData, key: &str, value: Option<Value>) {
    match value {
        Some(value) => d.set(key, value),
        None => d.remove(key),
    }
}

#[async_trait]
impl Resource for SensitiveDataScannerGroupResource {
    fn type_name(&self) -> &'static str {
        RESOURCE_TYPE
    }

    fn schema(&self) -> Schema {
        group_schema()
    }

    async fn create(&self, d: &mut ResourceData, meta: &ProviderConfiguration) -> DiagResult {
        let body = build_create_request(d);

        let resp = meta
            .api()
            .create_scanning_group(body)
            .await
            .map_err(|err| {
                translate_client_error(&err, "error creating SensitiveDataScannerGroup")
            })?;
        check_for_unparsed(&resp)?;

        let Some(group) = resp.data.as_ref() else {
            return Err(Diagnostic::error(
                "error creating SensitiveDataScannerGroup: response did not include the group",
            )
            .into());
        };

        d.set_id(group.id.clone());
        info!("Created sensitive data scanner group {}", group.id);

        update_state(d, &group.attributes);
        Ok(())
    }

    async fn read(&self, d: &mut ResourceData, meta: &ProviderConfiguration) -> DiagResult {
        let resp = match meta.api().list_scanning_groups().await {
            Ok(resp) => resp,
            Err(err) if err.is_not_found() => {
                warn!(
                    "Sensitive data scanner configuration not found, removing group {} from state",
                    d.id()
                );
                d.set_id("");
                return Ok(());
            }
            Err(err) => {
                return Err(translate_client_error(&err, "error calling ListScanningGroups"));
            }
        };
        check_for_unparsed(&resp)?;

        match resp.group(d.id()) {
            Some(group) => {
                debug!("Refreshed sensitive data scanner group {}", group.id);
                update_state(d, &group.attributes);
            }
            None => {
                warn!(
                    "Sensitive data scanner group {} no longer exists, removing from state",
                    d.id()
                );
                d.set_id("");
            }
        }
        Ok(())
    }

    async fn update(&self, d: &mut ResourceData, meta: &ProviderConfiguration) -> DiagResult {
        let id = d.id().to_string();
        let body = build_update_request(d);
        let attributes = body.data.attributes.clone();

        let resp = meta
            .api()
            .update_scanning_group(&id, body)
            .await
            .map_err(|err| {
                translate_client_error(&err, "error updating SensitiveDataScannerGroup")
            })?;
        check_for_unparsed(&resp)?;

        info!("Updated sensitive data scanner group {}", id);

        // The update response carries no group; what was sent is now remote state
        update_state(d, &attributes);
        Ok(())
    }

    async fn delete(&self, d: &mut ResourceData, meta: &ProviderConfiguration) -> DiagResult {
        let id = d.id().to_string();
        let body = build_delete_request(d);

        match meta.api().delete_scanning_group(&id, body).await {
            Ok(_) => info!("Deleted sensitive data scanner group {}", id),
            Err(err) if err.is_not_found() => {
                info!("Sensitive data scanner group {} was already deleted", id);
            }
            Err(err) => {
                // The group is assumed to still exist; prior state is kept.
                return Err(translate_client_error(
                    &err,
                    "error deleting SensitiveDataScannerGroup",
                ));
            }
        }

        d.set_id("");
        Ok(())
    }
}
