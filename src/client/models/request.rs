//! Request bodies for scanning group mutations

use serde::{Deserialize, Serialize};

use super::group::{
    SensitiveDataScannerGroupAttributes, SensitiveDataScannerGroupRelationships,
    SensitiveDataScannerGroupType,
};

/// Meta block carrying only the configuration version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerMetaVersionOnly {
    /// Expected configuration version; the API rejects the call on mismatch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// Data of a create request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGroupCreate {
    #[serde(rename = "type")]
    pub kind: SensitiveDataScannerGroupType,

    pub attributes: SensitiveDataScannerGroupAttributes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<SensitiveDataScannerGroupRelationships>,
}

/// `POST /config/groups` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGroupCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SensitiveDataScannerGroupCreate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<SensitiveDataScannerMetaVersionOnly>,
}

/// Data of an update request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGroupUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub kind: SensitiveDataScannerGroupType,

    pub attributes: SensitiveDataScannerGroupAttributes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<SensitiveDataScannerGroupRelationships>,
}

/// `PATCH /config/groups/{group_id}` body.
///
/// The attribute set is a complete replacement of the remote group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGroupUpdateRequest {
    pub data: SensitiveDataScannerGroupUpdate,

    #[serde(default)]
    pub meta: SensitiveDataScannerMetaVersionOnly,
}

/// `DELETE /config/groups/{group_id}` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGroupDeleteRequest {
    #[serde(default)]
    pub meta: SensitiveDataScannerMetaVersionOnly,
}
