//! List operation candidates.
//!
//! An operation is a candidate for listing a resource type if
//!  * its name starts with `Describe`, `Get` or `List`,
//!  * it belongs to the resource type's service, and
//!  * the rest of its name, lower-cased, is a plural of the resource type.
//!
//! A manual override short-circuits the heuristic.

use awslist_model::{Operation, Service};

use crate::catalog::Catalog;
use crate::error::ResolveError;
use crate::naming::plural_candidates;

/// Operation name prefixes, in candidate order.
pub const LIST_PREFIXES: [&str; 3] = ["Describe", "Get", "List"];

/// Find the list operation candidates of a resource type.
///
/// Returns at most one operation per prefix, in prefix order.
pub fn find_candidates<'a>(
    resource_type: &str,
    service: &'a Service,
    catalog: &Catalog,
) -> Result<Vec<&'a Operation>, ResolveError> {
    if let Some(name) = catalog.overrides.operations.get(resource_type) {
        return service
            .operation(name)
            .map(|op| vec![op])
            .ok_or_else(|| ResolveError::OverrideOperationNotFound(name.clone()));
    }

    let plurals = plural_candidates(resource_type, &catalog.prefix);
    let result: Vec<&Operation> = LIST_PREFIXES
        .iter()
        .filter_map(|prefix| exact_match(&plurals, service, prefix))
        .collect();

    if result.is_empty() {
        tracing::debug!(
            resource = %resource_type,
            operations = ?list_operation_names(service),
            "no operation matches a plural of the resource type"
        );
        return Err(ResolveError::NoListOperationCandidate);
    }

    Ok(result)
}

/// The first operation under `prefix` whose remainder equals a plural.
///
/// Plurals are tried in generation order; for each, operations are scanned in
/// lexicographic order.
fn exact_match<'a>(
    plurals: &[String],
    service: &'a Service,
    prefix: &str,
) -> Option<&'a Operation> {
    plurals.iter().find_map(|plural| {
        service.operations_with_prefix(prefix).find(|op| {
            op.exported_name
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.to_lowercase() == *plural)
        })
    })
}

fn list_operation_names(service: &Service) -> Vec<&str> {
    LIST_PREFIXES
        .iter()
        .flat_map(|prefix| service.operations_with_prefix(prefix))
        .map(|op| op.exported_name.as_str())
        .collect()
}
