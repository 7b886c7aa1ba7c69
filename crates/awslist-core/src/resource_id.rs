//! Resource identifier resolution.

use awslist_model::{Service, Shape, ShapeType};

use crate::catalog::{Catalog, NAME_PLACEHOLDER};
use crate::disambiguate::{Disambiguation, disambiguate};
use crate::error::ResolveError;

/// The identifier member of a list element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    /// Member name (e.g., `Name`).
    pub field: String,
    /// Scalar type of the member; `String` when the member is not declared.
    pub kind: ShapeType,
}

/// Resolve the identifier member of a resource type's list element.
///
/// Precedence: manual override, then the resource-ID table, then, for the
/// [`NAME_PLACEHOLDER`] sentinel, a unique name-like member of the element.
pub fn resolve_resource_id(
    resource_type: &str,
    service: &Service,
    element: Option<&Shape>,
    catalog: &Catalog,
) -> Result<ResourceId, ResolveError> {
    let table_entry = catalog.resource_ids.get(resource_type).map(String::as_str);
    let overridden = catalog
        .overrides
        .resource_ids
        .get(resource_type)
        .map(String::as_str)
        .or(table_entry.filter(|id| *id != NAME_PLACEHOLDER));

    if overridden.is_none() && table_entry.is_none() {
        return Err(ResolveError::NoResourceId);
    }

    let field = match disambiguate(overridden, || {
        element.map_or_else(Vec::new, |e| name_candidates(service, e))
    }) {
        Disambiguation::Unique(field) => field.to_owned(),
        Disambiguation::Absent => {
            tracing::warn!(
                resource = %resource_type,
                "found no name field candidates as resource ID for NAME_PLACEHOLDER"
            );
            return Err(ResolveError::NoResourceId);
        }
        Disambiguation::Ambiguous(candidates) => {
            tracing::warn!(
                resource = %resource_type,
                candidates = ?candidates,
                "found multiple name field candidates as resource ID for NAME_PLACEHOLDER"
            );
            return Err(ResolveError::AmbiguousResourceId(
                candidates.into_iter().map(str::to_owned).collect(),
            ));
        }
    };

    let kind = element
        .and_then(|e| service.member(e, &field))
        .map_or_else(
            || {
                tracing::warn!(
                    resource = %resource_type,
                    field = %field,
                    "resource ID is not a member of the list element"
                );
                ShapeType::String
            },
            |member| member.shape_type(),
        );

    Ok(ResourceId { field, kind })
}

/// Name-like members of a list element.
///
/// A member literally called `Name` wins outright; otherwise every member
/// whose lower-cased name contains `name` is a candidate.
#[must_use]
pub fn name_candidates<'a>(service: &'a Service, element: &'a Shape) -> Vec<&'a str> {
    let mut result = Vec::new();
    for member in service.members(element) {
        if member.name == "Name" {
            return vec![member.name];
        }
        if member.name.to_lowercase().contains("name") {
            result.push(member.name);
        }
    }
    result
}
