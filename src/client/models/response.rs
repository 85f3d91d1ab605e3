//! Response bodies of the sensitive data scanner endpoints

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::group::{SensitiveDataScannerConfigurationType, SensitiveDataScannerGroupResponse};
use super::request::SensitiveDataScannerMetaVersionOnly;

/// Configuration-level metadata returned by `GET /config`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_limit: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_count_limit: Option<i64>,
}

/// The scanner configuration object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerConfiguration {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type", default)]
    pub kind: SensitiveDataScannerConfigurationType,
}

/// JSON:API `type` of group items in the `included` array
const GROUP_TYPE: &str = "sensitive_data_scanner_group";

/// An item of the `included` array.
///
/// Only groups are modelled; rules and anything else are kept raw. The
/// variant is chosen by the `type` tag, so a group that fails to parse is an
/// error rather than an unknown item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensitiveDataScannerGetConfigIncludedItem {
    Group(SensitiveDataScannerGroupResponse),
    Other(Value),
}

impl<'de> Deserialize<'de> for SensitiveDataScannerGetConfigIncludedItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.get("type").and_then(Value::as_str) != Some(GROUP_TYPE) {
            return Ok(Self::Other(value));
        }

        let id = value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        serde_json::from_value(value)
            .map(Self::Group)
            .map_err(|e| de::Error::custom(format!("invalid group '{}': {}", id, e)))
    }
}

/// `GET /config` response: the configuration plus its groups and rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGetConfigResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SensitiveDataScannerConfiguration>,

    #[serde(default)]
    pub included: Vec<SensitiveDataScannerGetConfigIncludedItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<SensitiveDataScannerMeta>,
}

impl SensitiveDataScannerGetConfigResponse {
    /// Groups among the included items, in API order
    pub fn groups(&self) -> impl Iterator<Item = &SensitiveDataScannerGroupResponse> {
        self.included.iter().filter_map(|item| match item {
            SensitiveDataScannerGetConfigIncludedItem::Group(group) => Some(group),
            SensitiveDataScannerGetConfigIncludedItem::Other(_) => None,
        })
    }

    /// Look up a group by id
    pub fn group(&self, id: &str) -> Option<&SensitiveDataScannerGroupResponse> {
        self.groups().find(|g| g.id == id)
    }
}

/// `POST /config/groups` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerCreateGroupResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SensitiveDataScannerGroupResponse>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<SensitiveDataScannerMetaVersionOnly>,
}

/// `PATCH /config/groups/{group_id}` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGroupUpdateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<SensitiveDataScannerMetaVersionOnly>,
}

/// `DELETE /config/groups/{group_id}` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGroupDeleteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<SensitiveDataScannerMetaVersionOnly>,
}

/// Responses that may carry enum values this client could not parse.
pub trait CheckUnparsed {
    /// Description of the first unparsed element, if any
    fn unparsed(&self) -> Option<String>;
}

impl CheckUnparsed for SensitiveDataScannerGroupResponse {
    fn unparsed(&self) -> Option<String> {
        self.attributes
            .unparsed_product()
            .map(|raw| format!("group {} has unknown product '{}'", self.id, raw))
    }
}

impl CheckUnparsed for SensitiveDataScannerGetConfigResponse {
    fn unparsed(&self) -> Option<String> {
        self.groups().find_map(CheckUnparsed::unparsed)
    }
}

impl CheckUnparsed for SensitiveDataScannerCreateGroupResponse {
    fn unparsed(&self) -> Option<String> {
        self.data.as_ref().and_then(CheckUnparsed::unparsed)
    }
}

impl CheckUnparsed for SensitiveDataScannerGroupUpdateResponse {
    fn unparsed(&self) -> Option<String> {
        None
    }
}
