//! Output field resolution.
//!
//! The output field is the member of a list operation's response that holds
//! the resource instances, e.g. `LogGroups` of type `[]LogGroup` in
//! `DescribeLogGroupsOutput`.

use awslist_model::{Operation, Service, ShapeRef, ShapeType};

use crate::catalog::Catalog;
use crate::disambiguate::{Disambiguation, disambiguate};
use crate::error::ResolveError;

/// Element kind of the list member being looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A list of structures (primary pass).
    Structure,
    /// A list of strings (fallback pass).
    String,
}

impl ElementKind {
    fn shape_type(self) -> ShapeType {
        match self {
            Self::Structure => ShapeType::Structure,
            Self::String => ShapeType::String,
        }
    }

    fn as_str(self) -> &'static str {
        self.shape_type().as_str()
    }
}

/// A resolved output field: the operation and its list member.
#[derive(Debug, Clone, Copy)]
pub struct OutputField<'a> {
    /// The list operation.
    pub operation: &'a Operation,
    /// The list member of the operation's output.
    pub field: ShapeRef<'a>,
}

/// Direct output members of `op` that are lists of `kind`.
#[must_use]
pub fn output_field_candidates<'a>(
    service: &'a Service,
    op: &Operation,
    kind: ElementKind,
) -> Vec<ShapeRef<'a>> {
    let Some(output) = service.output_shape(op) else {
        return Vec::new();
    };

    service
        .members(output)
        .filter(|member| member.shape.is(ShapeType::List))
        .filter(|member| {
            service
                .list_element(member.shape)
                .is_some_and(|element| element.is(kind.shape_type()))
        })
        .collect()
}

/// Resolve the output field across all list operation candidates.
///
/// Candidate operations with several matching members are discarded. Exactly
/// one (operation, member) pair must remain. A manual output-field override
/// selects the first candidate operation declaring that member.
pub fn resolve_output_field<'a>(
    resource_type: &str,
    service: &'a Service,
    candidates: &[&'a Operation],
    kind: ElementKind,
    catalog: &Catalog,
) -> Result<OutputField<'a>, ResolveError> {
    let overridden = match catalog.overrides.output_fields.get(resource_type) {
        Some(name) => Some(overridden_field(service, candidates, name)?),
        None => None,
    };

    let result = disambiguate(overridden, || {
        candidates
            .iter()
            .filter_map(|&op| {
                let mut fields = output_field_candidates(service, op, kind);
                if fields.len() > 1 {
                    tracing::warn!(
                        resource = %resource_type,
                        operation = %op.exported_name,
                        candidates = ?fields.iter().map(|f| f.name).collect::<Vec<_>>(),
                        "multiple output field candidates"
                    );
                    return None;
                }
                fields.pop().map(|field| OutputField {
                    operation: op,
                    field,
                })
            })
            .collect()
    });

    match result {
        Disambiguation::Unique(found) => Ok(found),
        Disambiguation::Absent => Err(ResolveError::MissingOutputField(kind.as_str())),
        Disambiguation::Ambiguous(found) => Err(ResolveError::AmbiguousOutputField(
            found
                .iter()
                .map(|f| f.operation.exported_name.clone())
                .collect(),
        )),
    }
}

fn overridden_field<'a>(
    service: &'a Service,
    candidates: &[&'a Operation],
    name: &str,
) -> Result<OutputField<'a>, ResolveError> {
    candidates
        .iter()
        .find_map(|&op| {
            let output = service.output_shape(op)?;
            service.member(output, name).map(|field| OutputField {
                operation: op,
                field,
            })
        })
        .ok_or_else(|| ResolveError::OverrideOutputFieldNotFound(name.to_owned()))
}
