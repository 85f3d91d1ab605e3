//! Scanning group models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON:API type tag for scanning groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensitiveDataScannerGroupType {
    #[default]
    #[serde(rename = "sensitive_data_scanner_group")]
    SensitiveDataScannerGroup,
}

/// JSON:API type tag for the scanner configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensitiveDataScannerConfigurationType {
    #[default]
    #[serde(rename = "sensitive_data_scanner_configuration")]
    SensitiveDataScannerConfiguration,
}

/// Product a scanning group applies to.
///
/// Values the API returns that this client does not know are kept as
/// `Unparsed` so callers can reject them instead of silently dropping them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SensitiveDataScannerProduct {
    Logs,
    Rum,
    Events,
    Apm,
    Unparsed(String),
}

/// Error returned when a product token is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value '{0}' for SensitiveDataScannerProduct: valid values are logs, rum, events, apm")]
pub struct ParseProductError(pub String);

impl SensitiveDataScannerProduct {
    pub const ALLOWED: [SensitiveDataScannerProduct; 4] = [
        SensitiveDataScannerProduct::Logs,
        SensitiveDataScannerProduct::Rum,
        SensitiveDataScannerProduct::Events,
        SensitiveDataScannerProduct::Apm,
    ];

    /// Wire value of the product
    pub fn as_str(&self) -> &str {
        match self {
            SensitiveDataScannerProduct::Logs => "logs",
            SensitiveDataScannerProduct::Rum => "rum",
            SensitiveDataScannerProduct::Events => "events",
            SensitiveDataScannerProduct::Apm => "apm",
            SensitiveDataScannerProduct::Unparsed(raw) => raw,
        }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, SensitiveDataScannerProduct::Unparsed(_))
    }
}

impl FromStr for SensitiveDataScannerProduct {
    type Err = ParseProductError;

    /// Accepts the wire values case-insensitively, plus the legacy
    /// `DD_`-prefixed spelling (`DD_EVENTS`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let token = lowered.strip_prefix("dd_").unwrap_or(&lowered);
        match token {
            "logs" => Ok(SensitiveDataScannerProduct::Logs),
            "rum" => Ok(SensitiveDataScannerProduct::Rum),
            "events" => Ok(SensitiveDataScannerProduct::Events),
            "apm" => Ok(SensitiveDataScannerProduct::Apm),
            _ => Err(ParseProductError(s.to_string())),
        }
    }
}

impl From<String> for SensitiveDataScannerProduct {
    fn from(value: String) -> Self {
        match value.as_str() {
            "logs" => SensitiveDataScannerProduct::Logs,
            "rum" => SensitiveDataScannerProduct::Rum,
            "events" => SensitiveDataScannerProduct::Events,
            "apm" => SensitiveDataScannerProduct::Apm,
            _ => SensitiveDataScannerProduct::Unparsed(value),
        }
    }
}

impl From<SensitiveDataScannerProduct> for String {
    fn from(value: SensitiveDataScannerProduct) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SensitiveDataScannerProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter selecting the events a group scans
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerFilter {
    /// Query to filter the events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Attributes of a scanning group.
///
/// Every field is optional; unset fields are omitted from request bodies so
/// the API applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGroupAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<SensitiveDataScannerFilter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_list: Option<Vec<SensitiveDataScannerProduct>>,
}

impl SensitiveDataScannerGroupAttributes {
    /// First product value the API sent that this client cannot represent.
    pub fn unparsed_product(&self) -> Option<&str> {
        self.product_list
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|p| p.is_unparsed())
            .map(SensitiveDataScannerProduct::as_str)
    }
}

/// Relationship pointer to the parent configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerConfigurationData {
    #[serde(default)]
    pub data: Option<SensitiveDataScannerConfigurationRef>,
}

/// `{id, type}` reference to the scanner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerConfigurationRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: SensitiveDataScannerConfigurationType,
}

/// Relationships of a scanning group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGroupRelationships {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<SensitiveDataScannerConfigurationData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<serde_json::Value>,
}

/// A scanning group as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataScannerGroupResponse {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type", default)]
    pub kind: SensitiveDataScannerGroupType,

    #[serde(default)]
    pub attributes: SensitiveDataScannerGroupAttributes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<SensitiveDataScannerGroupRelationships>,
}
