//! Botocore JSON definition types for deserialization.
//!
//! This module provides the types needed to parse the `api-2.json` (or
//! `service-2.json`) and `paginators-1.json` documents shipped with the AWS
//! SDKs. Only the parts the generator reads are modelled; everything else in
//! the documents is ignored by serde.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level service definition document.
#[derive(Debug, Deserialize)]
pub struct ServiceDefinition {
    /// Service metadata (ids, API version).
    pub metadata: ServiceMetadata,
    /// All operations, keyed by operation name.
    #[serde(default)]
    pub operations: BTreeMap<String, OperationDefinition>,
    /// All shapes, keyed by shape name.
    #[serde(default)]
    pub shapes: BTreeMap<String, ShapeDefinition>,
}

/// Service-level metadata.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    /// API version (e.g., "2015-06-23").
    pub api_version: Option<String>,
    /// Service identifier (e.g., "Device Farm").
    pub service_id: Option<String>,
    /// Short service name (e.g., "AWS Device Farm").
    pub service_abbreviation: Option<String>,
    /// Full service name.
    pub service_full_name: Option<String>,
    /// Endpoint prefix (e.g., "devicefarm").
    pub endpoint_prefix: Option<String>,
}

impl ServiceMetadata {
    /// The most specific service identifier present in the metadata.
    #[must_use]
    pub fn display_id(&self) -> &str {
        self.service_id
            .as_deref()
            .or(self.service_abbreviation.as_deref())
            .or(self.service_full_name.as_deref())
            .or(self.endpoint_prefix.as_deref())
            .unwrap_or_default()
    }

    /// Derive the package-style service name.
    ///
    /// The service id is lower-cased with everything but ASCII alphanumerics
    /// removed, so `Device Farm` becomes `devicefarm`.
    #[must_use]
    pub fn package_name(&self) -> String {
        self.display_id()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}

/// An operation definition.
#[derive(Debug, Deserialize)]
pub struct OperationDefinition {
    /// Operation name, when repeated inside the definition.
    pub name: Option<String>,
    /// Input shape reference.
    pub input: Option<ShapeTarget>,
    /// Output shape reference.
    pub output: Option<ShapeTarget>,
}

/// A reference to another shape by name.
#[derive(Debug, Clone, Deserialize)]
pub struct ShapeTarget {
    /// The referenced shape name.
    pub shape: String,
}

/// A single shape definition.
#[derive(Debug, Deserialize)]
pub struct ShapeDefinition {
    /// Shape type (`structure`, `list`, `map`, `string`, ...).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Structure members.
    #[serde(default)]
    pub members: BTreeMap<String, ShapeTarget>,
    /// List element.
    pub member: Option<ShapeTarget>,
    /// Map key.
    pub key: Option<ShapeTarget>,
    /// Map value.
    pub value: Option<ShapeTarget>,
    /// Names of required structure members.
    #[serde(default)]
    pub required: Vec<String>,
}

/// The `paginators-1.json` document.
#[derive(Debug, Default, Deserialize)]
pub struct PaginatorsDefinition {
    /// Paginator configuration keyed by operation name.
    #[serde(default)]
    pub pagination: BTreeMap<String, serde_json::Value>,
}
