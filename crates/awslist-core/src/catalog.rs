//! The resource catalog: externally curated tables driving generation.
//!
//! The catalog maps resource types to services and identifier members, lists
//! the resource types known to carry tags, and holds the manual override
//! tables that take precedence over every heuristic.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, CodegenResult};

/// Resource-ID table value meaning "find a name-like member".
pub const NAME_PLACEHOLDER: &str = "NAME_PLACEHOLDER";

/// Provider prefix stripped from resource types before pluralization.
pub const DEFAULT_PREFIX: &str = "aws_";

/// Fixed input parameter for a generated call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    /// A single string value.
    Single(String),
    /// A list of string values.
    List(Vec<String>),
}

/// Manual override tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    /// Resource types never processed.
    pub excluded: BTreeSet<String>,
    /// Resource type -> list operation name.
    pub operations: BTreeMap<String, String>,
    /// Resource type -> output field name.
    pub output_fields: BTreeMap<String, String>,
    /// Resource type -> identifier member name.
    pub resource_ids: BTreeMap<String, String>,
    /// Resource type -> fixed input parameters for the list call.
    pub inputs: BTreeMap<String, BTreeMap<String, InputValue>>,
}

/// All external tables consumed by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Catalog {
    /// Provider prefix of every resource type.
    pub prefix: String,
    /// Resource types known to carry tags.
    pub tagged: BTreeSet<String>,
    /// Resource type -> service package name.
    pub services: BTreeMap<String, String>,
    /// Resource type -> identifier member, or [`NAME_PLACEHOLDER`].
    pub resource_ids: BTreeMap<String, String>,
    /// Manual overrides.
    pub overrides: Overrides,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            tagged: BTreeSet::new(),
            services: BTreeMap::new(),
            resource_ids: BTreeMap::new(),
            overrides: Overrides::default(),
        }
    }
}

impl Catalog {
    /// Parse a catalog from TOML.
    pub fn from_toml_str(s: &str) -> CodegenResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> CodegenResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CodegenError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            resource_types = catalog.services.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The service a resource type belongs to.
    #[must_use]
    pub fn service_of(&self, resource_type: &str) -> Option<&str> {
        self.services.get(resource_type).map(String::as_str)
    }

    /// Whether a resource type is on the exclusion list.
    #[must_use]
    pub fn is_excluded(&self, resource_type: &str) -> bool {
        self.overrides.excluded.contains(resource_type)
    }

    /// Whether a resource type is known to carry tags.
    #[must_use]
    pub fn is_tagged(&self, resource_type: &str) -> bool {
        self.tagged.contains(resource_type)
    }

    /// Every service referenced by at least one resource type, sorted.
    #[must_use]
    pub fn covered_services(&self) -> BTreeSet<&str> {
        self.services.values().map(String::as_str).collect()
    }

    /// Resource types mapped to `service`, sorted.
    pub fn resource_types_of<'a>(&'a self, service: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.services
            .iter()
            .filter(move |(_, s)| s.as_str() == service)
            .map(|(rt, _)| rt.as_str())
    }

    /// Fixed input parameters of a resource type's list call.
    #[must_use]
    pub fn inputs_of(&self, resource_type: &str) -> BTreeMap<String, InputValue> {
        self.overrides
            .inputs
            .get(resource_type)
            .cloned()
            .unwrap_or_default()
    }
}
