//! Sensitive Data Scanner API data models
//!
//! Request and response bodies follow the JSON:API shape of the Datadog v2
//! endpoints. Models are organized by direction for easy discovery.

// Every wire type is exported, including ones only the mock client builds.
#![allow(unused_imports)]

mod group;
mod request;
mod response;

pub use group::{
    ParseProductError, SensitiveDataScannerConfigurationData,
    SensitiveDataScannerConfigurationRef, SensitiveDataScannerConfigurationType,
    SensitiveDataScannerFilter, SensitiveDataScannerGroupAttributes,
    SensitiveDataScannerGroupRelationships, SensitiveDataScannerGroupResponse,
    SensitiveDataScannerGroupType, SensitiveDataScannerProduct,
};
pub use request::{
    SensitiveDataScannerGroupCreate, SensitiveDataScannerGroupCreateRequest,
    SensitiveDataScannerGroupDeleteRequest, SensitiveDataScannerGroupUpdate,
    SensitiveDataScannerGroupUpdateRequest, SensitiveDataScannerMetaVersionOnly,
};
pub use response::{
    CheckUnparsed, SensitiveDataScannerConfiguration, SensitiveDataScannerCreateGroupResponse,
    SensitiveDataScannerGetConfigIncludedItem, SensitiveDataScannerGetConfigResponse,
    SensitiveDataScannerGroupDeleteResponse, SensitiveDataScannerGroupUpdateResponse,
    SensitiveDataScannerMeta,
};
