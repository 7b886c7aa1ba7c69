//! Services and their operations.

use std::collections::BTreeMap;

use crate::definition::{PaginatorsDefinition, ServiceDefinition};
use crate::error::ModelResult;
use crate::shape::{Shape, ShapeRef};

/// A single API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Operation name as exported by the SDK (e.g., `ListProjects`).
    pub exported_name: String,
    /// Input shape name.
    pub input: Option<String>,
    /// Output shape name.
    pub output: Option<String>,
    /// Whether the SDK ships a paginator for this operation.
    pub paginated: bool,
}

/// A service: a named grouping of operations and the shapes they reference.
///
/// Operations and shapes are kept in sorted maps, so every iteration over a
/// service is in lexicographic name order.
#[derive(Debug, Clone)]
pub struct Service {
    /// Package-style name (e.g., `devicefarm`).
    pub package_name: String,
    /// Human-readable service id (e.g., `Device Farm`).
    pub service_id: String,
    /// API version of the loaded definition.
    pub api_version: String,
    operations: BTreeMap<String, Operation>,
    shapes: BTreeMap<String, Shape>,
}

impl Service {
    /// Build a service from its parsed definition documents.
    #[must_use]
    pub fn from_definition(def: ServiceDefinition, paginators: &PaginatorsDefinition) -> Self {
        let package_name = def.metadata.package_name();
        let service_id = def.metadata.display_id().to_owned();
        let api_version = def.metadata.api_version.clone().unwrap_or_default();

        let operations = def
            .operations
            .into_iter()
            .map(|(key, op)| {
                let exported_name = op.name.unwrap_or_else(|| key.clone());
                let paginated = paginators.pagination.contains_key(&exported_name);
                let operation = Operation {
                    exported_name,
                    input: op.input.map(|t| t.shape),
                    output: op.output.map(|t| t.shape),
                    paginated,
                };
                (key, operation)
            })
            .collect();

        let shapes = def
            .shapes
            .into_iter()
            .map(|(name, shape)| (name.clone(), Shape::from_definition(name, shape)))
            .collect();

        Self {
            package_name,
            service_id,
            api_version,
            operations,
            shapes,
        }
    }

    /// Parse a service from in-memory JSON documents.
    pub fn from_json_str(api: &str, paginators: Option<&str>) -> ModelResult<Self> {
        let def: ServiceDefinition = serde_json::from_str(api)?;
        let paginators = match paginators {
            Some(p) => serde_json::from_str(p)?,
            None => PaginatorsDefinition::default(),
        };
        Ok(Self::from_definition(def, &paginators))
    }

    /// Look up an operation by its exported name.
    #[must_use]
    pub fn operation(&self, exported_name: &str) -> Option<&Operation> {
        self.operations
            .values()
            .find(|op| op.exported_name == exported_name)
    }

    /// All operations in lexicographic order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    /// Operations whose exported name starts with `prefix`, in lexicographic order.
    pub fn operations_with_prefix<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = &'a Operation> {
        self.operations
            .values()
            .filter(move |op| op.exported_name.starts_with(prefix))
    }

    /// Look up a shape by name.
    #[must_use]
    pub fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.get(name)
    }

    /// The input shape of an operation.
    #[must_use]
    pub fn input_shape(&self, op: &Operation) -> Option<&Shape> {
        op.input.as_deref().and_then(|name| self.shape(name))
    }

    /// The output shape of an operation.
    #[must_use]
    pub fn output_shape(&self, op: &Operation) -> Option<&Shape> {
        op.output.as_deref().and_then(|name| self.shape(name))
    }

    /// The direct members of a structure shape, with their target shapes resolved.
    ///
    /// Members pointing at shapes missing from the service are skipped.
    pub fn members<'a>(&'a self, shape: &'a Shape) -> impl Iterator<Item = ShapeRef<'a>> + 'a {
        shape.members.iter().filter_map(move |(name, target)| {
            let resolved = self.shape(target);
            if resolved.is_none() {
                tracing::debug!(
                    service = %self.package_name,
                    shape = %shape.name,
                    member = %name,
                    target = %target,
                    "member targets unknown shape"
                );
            }
            resolved.map(|s| ShapeRef {
                name: name.as_str(),
                shape: s,
            })
        })
    }

    /// A single member of a structure shape.
    #[must_use]
    pub fn member<'a>(&'a self, shape: &'a Shape, name: &str) -> Option<ShapeRef<'a>> {
        let (member, target) = shape.members.get_key_value(name)?;
        self.shape(target).map(|s| ShapeRef {
            name: member.as_str(),
            shape: s,
        })
    }

    /// The element shape of a list shape.
    #[must_use]
    pub fn list_element(&self, shape: &Shape) -> Option<&Shape> {
        shape.element.as_deref().and_then(|name| self.shape(name))
    }

    /// The key shape of a map shape.
    #[must_use]
    pub fn map_key(&self, shape: &Shape) -> Option<&Shape> {
        shape.key.as_deref().and_then(|name| self.shape(name))
    }

    /// The value shape of a map shape.
    #[must_use]
    pub fn map_value(&self, shape: &Shape) -> Option<&Shape> {
        shape.value.as_deref().and_then(|name| self.shape(name))
    }
}
