//! Auxiliary field synthesizers: tags, creation time and owner filter.
//!
//! Each synthesizer inspects the members of the list element shape on its own
//! and yields at most one fragment.

use awslist_model::{Service, Shape, ShapeType};

use crate::fragment::{CreationTimeFragment, OwnerFilterFragment, TagsFragment, TimestampSource};
use crate::report::{Diagnostic, DiagnosticKind, MemberScope};

/// Member holding tags.
pub const TAGS_FIELD: &str = "Tags";

/// Member holding the owning account id.
pub const OWNER_FIELD: &str = "OwnerId";

/// Creation-time member names, in lookup order.
pub const CREATION_TIME_FIELDS: [&str; 9] = [
    "LaunchTime",
    "CreateTime",
    "CreateDate",
    "CreatedTime",
    "CreationDate",
    "CreationTime",
    "CreationTimestamp",
    "StartTime",
    "InstanceCreateTime",
];

/// Tags extraction for a list element, if it has a `Tags` list or a `Tags`
/// map from string to string.
#[must_use]
pub fn tags_fragment(service: &Service, element: &Shape) -> Option<TagsFragment> {
    let member = service.member(element, TAGS_FIELD)?;
    let field = member.name.to_owned();
    match member.shape_type() {
        ShapeType::List => Some(TagsFragment::List { field }),
        ShapeType::Map => {
            let is_string = |s: Option<&Shape>| s.is_some_and(|s| s.is(ShapeType::String));
            let map = member.shape;
            (is_string(service.map_key(map)) && is_string(service.map_value(map)))
                .then_some(TagsFragment::Map { field })
        }
        _ => None,
    }
}

/// Creation-time extraction for a list element.
///
/// The first name of [`CREATION_TIME_FIELDS`] present among the members is
/// used. A member of an unsupported type yields no fragment and a diagnostic.
pub fn creation_time_fragment(
    resource_type: &str,
    service: &Service,
    element: &Shape,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<CreationTimeFragment> {
    let member = CREATION_TIME_FIELDS
        .iter()
        .find_map(|name| service.member(element, name))?;

    let source = match member.shape_type() {
        ShapeType::String => TimestampSource::String,
        ShapeType::Timestamp => TimestampSource::Native,
        ShapeType::Long => TimestampSource::EpochMillis,
        other => {
            tracing::warn!(
                resource = %resource_type,
                field = %member.name,
                shape_type = %other,
                "uncovered creation time type"
            );
            diagnostics.push(Diagnostic {
                resource_type: resource_type.to_owned(),
                kind: DiagnosticKind::UnsupportedCreationTime {
                    field: member.name.to_owned(),
                    shape_type: other,
                },
            });
            return None;
        }
    };

    Some(CreationTimeFragment {
        field: member.name.to_owned(),
        source,
    })
}

/// Owner filter for a list element with an `OwnerId` member.
#[must_use]
pub fn owner_filter_fragment(service: &Service, element: &Shape) -> Option<OwnerFilterFragment> {
    service
        .member(element, OWNER_FIELD)
        .map(|member| OwnerFilterFragment {
            field: member.name.to_owned(),
        })
}

/// Members resembling the tags or owner fields without matching exactly.
///
/// Element members containing `tag` or `owner` and input members containing
/// `owner` (case-insensitively) are reported.
#[must_use]
pub fn near_misses(
    resource_type: &str,
    service: &Service,
    element: &Shape,
    input: Option<&Shape>,
) -> Vec<Diagnostic> {
    let output = service
        .members(element)
        .filter(|m| {
            let lower = m.name.to_lowercase();
            (lower.contains("tag") && m.name != TAGS_FIELD)
                || (lower.contains("owner") && m.name != OWNER_FIELD)
        })
        .map(|m| (MemberScope::Output, m));

    let input = input
        .into_iter()
        .flat_map(|shape| service.members(shape))
        .filter(|m| m.name.to_lowercase().contains("owner"))
        .map(|m| (MemberScope::Input, m));

    output
        .chain(input)
        .map(|(scope, m)| {
            tracing::info!(
                resource = %resource_type,
                scope = %scope,
                field = %m.name,
                "found member resembling tags or owner"
            );
            Diagnostic {
                resource_type: resource_type.to_owned(),
                kind: DiagnosticKind::NearMiss {
                    scope,
                    field: m.name.to_owned(),
                    shape_type: m.shape_type(),
                },
            }
        })
        .collect()
}
